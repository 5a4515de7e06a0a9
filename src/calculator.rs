//! Financial metrics calculators.
//!
//! Four independent, pure functions turn raw business figures into
//! ratios and a [`Rating`].  They share one shape: take differences,
//! derive ratios with every denominator guarded, then classify the key
//! ratio.  None of them fail.  Degenerate figures (zero, infinite or
//! `NaN`) are returned in the result for the caller to render.

use crate::models::{
    BreakEvenInput, BreakEvenResult, ExportMarginInput, ExportMarginResult, ProfitabilityInput,
    ProfitabilityResult, RoiInput, RoiResult,
};
use crate::rating::{
    BREAK_EVEN_THRESHOLDS, EXPORT_MARGIN_THRESHOLDS, PROFITABILITY_THRESHOLDS,
    ROI_THRESHOLDS,
};

/// `part / whole` as a percentage, or zero when `whole` is not positive.
fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Return on investment over the holding period.
///
/// The annualised figure compounds the total ROI over
/// `time_period_years`.  It is zero for a non-positive period and
/// `NaN` when the ROI is below -100% with a fractional exponent; that
/// case is passed through rather than clamped.
pub fn compute_roi(input: &RoiInput) -> RoiResult {
    let total_investment = input.initial_investment + input.additional_costs;
    let total_return = input.final_value - total_investment;
    let roi_percent = percent_of(total_return, total_investment);
    let annualized_roi_percent = if input.time_period_years > 0.0 {
        ((1.0 + roi_percent / 100.0).powf(1.0 / input.time_period_years) - 1.0) * 100.0
    } else {
        0.0
    };
    RoiResult {
        total_return,
        roi_percent,
        annualized_roi_percent,
        status: ROI_THRESHOLDS.classify(roi_percent),
    }
}

/// Gross and net profit with their margins, rated on net margin.
pub fn compute_profitability(input: &ProfitabilityInput) -> ProfitabilityResult {
    let gross_profit = input.revenue - input.cost_of_goods;
    let net_profit = gross_profit - input.operating_expenses;
    let net_margin_percent = percent_of(net_profit, input.revenue);
    ProfitabilityResult {
        gross_profit,
        net_profit,
        gross_margin_percent: percent_of(gross_profit, input.revenue),
        net_margin_percent,
        status: PROFITABILITY_THRESHOLDS.classify(net_margin_percent),
    }
}

/// Break-even volume, rated on the contribution margin ratio.
pub fn compute_break_even(input: &BreakEvenInput) -> BreakEvenResult {
    let contribution_margin = input.selling_price_per_unit - input.variable_cost_per_unit;
    let contribution_margin_ratio_percent =
        percent_of(contribution_margin, input.selling_price_per_unit);
    // A unit that loses money never breaks even.
    let break_even_units = if contribution_margin > 0.0 {
        input.fixed_costs / contribution_margin
    } else {
        0.0
    };
    BreakEvenResult {
        break_even_units,
        break_even_revenue: break_even_units * input.selling_price_per_unit,
        contribution_margin,
        contribution_margin_ratio_percent,
        status: BREAK_EVEN_THRESHOLDS.classify(contribution_margin_ratio_percent),
    }
}

/// Per-unit and total margin on an export shipment after landed costs.
pub fn compute_export_margin(input: &ExportMarginInput) -> ExportMarginResult {
    let total_costs_per_unit = input.product_cost
        + input.shipping_cost
        + input.insurance_cost
        + input.customs_cost
        + input.marketing_cost;
    let profit_per_unit = input.selling_price - total_costs_per_unit;
    let margin_percent = percent_of(profit_per_unit, input.selling_price);
    ExportMarginResult {
        total_costs_per_unit,
        profit_per_unit,
        total_export_margin: profit_per_unit * input.units,
        margin_percent,
        status: EXPORT_MARGIN_THRESHOLDS.classify(margin_percent),
    }
}
