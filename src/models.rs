//! Data models for the export metrics calculators.
//!
//! The `models` module defines the input and result records for the
//! four calculators.  Every record derives `Serialize` and
//! `Deserialize` so it can be submitted to and returned from the HTTP
//! API unchanged.  Inputs are plain values: a calculation never
//! mutates its input and always returns a fresh result.
//!
//! Input fields are lenient when deserialised.  A missing or `null`
//! field takes the field's default, a JSON number is used as-is, and a
//! string is coerced the way the dashboard forms coerce text boxes
//! (see [`crate::forms::parse_field`]).

use crate::forms::{lenient_one, lenient_zero};
use crate::rating::Rating;
use serde::{Deserialize, Serialize};

fn one() -> f64 {
    1.0
}

/// Input to the return-on-investment calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    /// Amount invested up front.
    #[serde(default, deserialize_with = "lenient_zero")]
    pub initial_investment: f64,
    /// Value of the investment at the end of the period.
    #[serde(default, deserialize_with = "lenient_zero")]
    pub final_value: f64,
    /// Holding period in years.  Defaults to one year.
    #[serde(default = "one", deserialize_with = "lenient_one")]
    pub time_period_years: f64,
    /// Costs incurred on top of the initial investment (fees,
    /// storage, handling).
    #[serde(default, deserialize_with = "lenient_zero")]
    pub additional_costs: f64,
}

impl Default for RoiInput {
    fn default() -> Self {
        Self {
            initial_investment: 0.0,
            final_value: 0.0,
            time_period_years: 1.0,
            additional_costs: 0.0,
        }
    }
}

/// Result of the return-on-investment calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// Final value minus everything invested.
    pub total_return: f64,
    pub roi_percent: f64,
    /// Compound annual rate.  `NaN` when the ROI is below -100% and
    /// the period is fractional.
    pub annualized_roi_percent: f64,
    pub status: Rating,
}

/// Input to the profitability calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityInput {
    #[serde(default, deserialize_with = "lenient_zero")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient_zero")]
    pub cost_of_goods: f64,
    #[serde(default, deserialize_with = "lenient_zero")]
    pub operating_expenses: f64,
    /// Units sold.  Collected by the form but not used by any of the
    /// derived figures.
    #[serde(default, deserialize_with = "lenient_zero")]
    pub units: f64,
}

/// Result of the profitability calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityResult {
    pub gross_profit: f64,
    pub net_profit: f64,
    pub gross_margin_percent: f64,
    pub net_margin_percent: f64,
    pub status: Rating,
}

/// Input to the break-even calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenInput {
    #[serde(default, deserialize_with = "lenient_zero")]
    pub fixed_costs: f64,
    #[serde(default, deserialize_with = "lenient_zero")]
    pub variable_cost_per_unit: f64,
    #[serde(default, deserialize_with = "lenient_zero")]
    pub selling_price_per_unit: f64,
}

/// Result of the break-even calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    /// Units that must be sold to cover fixed costs.  Zero when each
    /// unit contributes nothing (or loses money).
    pub break_even_units: f64,
    pub break_even_revenue: f64,
    /// Selling price minus variable cost, per unit.
    pub contribution_margin: f64,
    pub contribution_margin_ratio_percent: f64,
    pub status: Rating,
}

/// Input to the export margin calculator.  All costs are per unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportMarginInput {
    #[serde(default, deserialize_with = "lenient_zero")]
    pub selling_price: f64,
    #[serde(default, deserialize_with = "lenient_zero")]
    pub product_cost: f64,
    #[serde(default, deserialize_with = "lenient_zero")]
    pub shipping_cost: f64,
    #[serde(default, deserialize_with = "lenient_zero")]
    pub insurance_cost: f64,
    #[serde(default, deserialize_with = "lenient_zero")]
    pub customs_cost: f64,
    #[serde(default, deserialize_with = "lenient_zero")]
    pub marketing_cost: f64,
    /// Shipment volume.  Defaults to a single unit.
    #[serde(default = "one", deserialize_with = "lenient_one")]
    pub units: f64,
}

impl Default for ExportMarginInput {
    fn default() -> Self {
        Self {
            selling_price: 0.0,
            product_cost: 0.0,
            shipping_cost: 0.0,
            insurance_cost: 0.0,
            customs_cost: 0.0,
            marketing_cost: 0.0,
            units: 1.0,
        }
    }
}

/// Result of the export margin calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportMarginResult {
    /// Sum of every landed cost for one unit.
    pub total_costs_per_unit: f64,
    pub profit_per_unit: f64,
    /// Per-unit profit scaled by the shipment volume.
    pub total_export_margin: f64,
    pub margin_percent: f64,
    pub status: Rating,
}
