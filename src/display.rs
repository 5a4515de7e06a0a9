//! Display-safe rendering of calculator results.
//!
//! Results may carry infinite or `NaN` figures.  Every formatter here
//! renders those as `"N/A"` so a form never shows `NaN%`.

use crate::models::{BreakEvenResult, ExportMarginResult, ProfitabilityResult, RoiResult};
use crate::rating::Rating;

pub const NOT_AVAILABLE: &str = "N/A";

/// Insert thousands separators into a string of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"$1,234.56"`, `"-$50.00"`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // Rounding can turn a tiny negative into "0.00"; don't sign it.
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// `"12.34%"`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.2}%", value)
}

/// Whole units, rounded up since a fraction of a unit still has to be
/// sold: `"1,000"`.
pub fn format_units(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let rounded = value.ceil();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&digits))
}

/// What a calculator form shows for a result.
pub trait Summary {
    fn status(&self) -> Rating;

    /// Labelled, formatted figures in display order.
    fn display_fields(&self) -> Vec<(&'static str, String)>;
}

impl Summary for RoiResult {
    fn status(&self) -> Rating {
        self.status
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total Return", format_currency(self.total_return)),
            ("ROI", format_percent(self.roi_percent)),
            ("Annualized ROI", format_percent(self.annualized_roi_percent)),
        ]
    }
}

impl Summary for ProfitabilityResult {
    fn status(&self) -> Rating {
        self.status
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Gross Profit", format_currency(self.gross_profit)),
            ("Net Profit", format_currency(self.net_profit)),
            ("Gross Margin", format_percent(self.gross_margin_percent)),
            ("Net Margin", format_percent(self.net_margin_percent)),
        ]
    }
}

impl Summary for BreakEvenResult {
    fn status(&self) -> Rating {
        self.status
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Break-even Units", format_units(self.break_even_units)),
            ("Break-even Revenue", format_currency(self.break_even_revenue)),
            ("Contribution Margin", format_currency(self.contribution_margin)),
            ("Contribution Margin Ratio", format_percent(self.contribution_margin_ratio_percent)),
        ]
    }
}

impl Summary for ExportMarginResult {
    fn status(&self) -> Rating {
        self.status
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total Costs per Unit", format_currency(self.total_costs_per_unit)),
            ("Profit per Unit", format_currency(self.profit_per_unit)),
            ("Total Export Margin", format_currency(self.total_export_margin)),
            ("Margin", format_percent(self.margin_percent)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{compute_break_even, compute_roi};
    use crate::models::{BreakEvenInput, RoiInput};

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.564), "$1,234.56");
        assert_eq!(format_currency(-50.0), "-$50.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(f64::INFINITY), "N/A");
    }

    #[test]
    fn test_format_percent_and_units() {
        assert_eq!(format_percent(200.0 / 3.0), "66.67%");
        assert_eq!(format_percent(f64::NAN), "N/A");
        assert_eq!(format_units(1000.0), "1,000");
        assert_eq!(format_units(333.2), "334");
        assert_eq!(format_units(f64::NEG_INFINITY), "N/A");
    }

    #[test]
    fn test_nan_annualized_roi_renders_as_not_available() {
        let result = compute_roi(&RoiInput {
            initial_investment: 1000.0,
            final_value: -500.0,
            time_period_years: 2.0,
            additional_costs: 0.0,
        });
        let fields = result.display_fields();
        assert_eq!(fields[1], ("ROI", "-150.00%".to_string()));
        assert_eq!(fields[2], ("Annualized ROI", "N/A".to_string()));
        assert_eq!(result.status().color(), "red");
    }

    #[test]
    fn test_break_even_summary() {
        let result = compute_break_even(&BreakEvenInput {
            fixed_costs: 10000.0,
            variable_cost_per_unit: 5.0,
            selling_price_per_unit: 15.0,
        });
        let fields = result.display_fields();
        assert_eq!(fields[0].1, "1,000");
        assert_eq!(fields[1].1, "$15,000.00");
        assert_eq!(result.status(), Rating::Excellent);
    }
}
