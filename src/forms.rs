//! Coercion of raw form text into calculator inputs.
//!
//! The dashboard forms hand over whatever the user typed.  A field is
//! read as the longest leading decimal number (`"12.5kg"` is 12.5) or
//! a leading `Infinity`, and a field that is empty, unparseable or zero
//! falls back to its default.  Most fields default to zero; the ROI
//! holding period and the export shipment volume default to one.
//! JSON values that are neither numbers nor strings (booleans, arrays,
//! objects) also take the default.

use crate::models::{BreakEvenInput, ExportMarginInput, ProfitabilityInput, RoiInput};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Parse one form field, falling back to `default`.
pub fn parse_field(text: &str, default: f64) -> f64 {
    match leading_number(text.trim_start()) {
        Some(value) if value != 0.0 && !value.is_nan() => value,
        _ => default,
    }
}

/// Longest prefix of `text` that reads as a decimal number with an
/// optional sign, fraction and exponent, or a signed `Infinity`.
fn leading_number(text: &str) -> Option<f64> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if unsigned.starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    text[..end].parse().ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Number(f64),
    Text(String),
    // Booleans, arrays and objects carry no number.
    Other(IgnoredAny),
}

fn lenient<'de, D>(deserializer: D, default: f64) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawField>::deserialize(deserializer)? {
        Some(RawField::Number(value)) => value,
        Some(RawField::Text(text)) => parse_field(&text, default),
        Some(RawField::Other(_)) | None => default,
    })
}

/// Field deserializer for quantities defaulting to zero.
pub(crate) fn lenient_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient(deserializer, 0.0)
}

/// Field deserializer for quantities defaulting to one.
pub(crate) fn lenient_one<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient(deserializer, 1.0)
}

/// Raw text of the ROI form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoiForm {
    pub initial_investment: String,
    pub final_value: String,
    pub time_period_years: String,
    pub additional_costs: String,
}

impl From<&RoiForm> for RoiInput {
    fn from(form: &RoiForm) -> Self {
        RoiInput {
            initial_investment: parse_field(&form.initial_investment, 0.0),
            final_value: parse_field(&form.final_value, 0.0),
            time_period_years: parse_field(&form.time_period_years, 1.0),
            additional_costs: parse_field(&form.additional_costs, 0.0),
        }
    }
}

/// Raw text of the profitability form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfitabilityForm {
    pub revenue: String,
    pub cost_of_goods: String,
    pub operating_expenses: String,
    pub units: String,
}

impl From<&ProfitabilityForm> for ProfitabilityInput {
    fn from(form: &ProfitabilityForm) -> Self {
        ProfitabilityInput {
            revenue: parse_field(&form.revenue, 0.0),
            cost_of_goods: parse_field(&form.cost_of_goods, 0.0),
            operating_expenses: parse_field(&form.operating_expenses, 0.0),
            units: parse_field(&form.units, 0.0),
        }
    }
}

/// Raw text of the break-even form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreakEvenForm {
    pub fixed_costs: String,
    pub variable_cost_per_unit: String,
    pub selling_price_per_unit: String,
}

impl From<&BreakEvenForm> for BreakEvenInput {
    fn from(form: &BreakEvenForm) -> Self {
        BreakEvenInput {
            fixed_costs: parse_field(&form.fixed_costs, 0.0),
            variable_cost_per_unit: parse_field(&form.variable_cost_per_unit, 0.0),
            selling_price_per_unit: parse_field(&form.selling_price_per_unit, 0.0),
        }
    }
}

/// Raw text of the export margin form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportMarginForm {
    pub selling_price: String,
    pub product_cost: String,
    pub shipping_cost: String,
    pub insurance_cost: String,
    pub customs_cost: String,
    pub marketing_cost: String,
    pub units: String,
}

impl From<&ExportMarginForm> for ExportMarginInput {
    fn from(form: &ExportMarginForm) -> Self {
        ExportMarginInput {
            selling_price: parse_field(&form.selling_price, 0.0),
            product_cost: parse_field(&form.product_cost, 0.0),
            shipping_cost: parse_field(&form.shipping_cost, 0.0),
            insurance_cost: parse_field(&form.insurance_cost, 0.0),
            customs_cost: parse_field(&form.customs_cost, 0.0),
            marketing_cost: parse_field(&form.marketing_cost, 0.0),
            units: parse_field(&form.units, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute_export_margin;

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("1250", 0.0), 1250.0);
        assert_eq!(parse_field("  -3.5", 0.0), -3.5);
        assert_eq!(parse_field("12.5kg", 0.0), 12.5);
        assert_eq!(parse_field(".75", 0.0), 0.75);
        assert_eq!(parse_field("2e3 tons", 0.0), 2000.0);
        assert_eq!(parse_field("4e", 0.0), 4.0);
        assert_eq!(parse_field("", 0.0), 0.0);
        assert_eq!(parse_field("abc", 0.0), 0.0);
        assert_eq!(parse_field("-", 1.0), 1.0);
        assert_eq!(parse_field(".", 1.0), 1.0);
        assert_eq!(parse_field("NaN", 1.0), 1.0);
    }

    #[test]
    fn test_leading_infinity() {
        assert_eq!(parse_field("Infinity", 0.0), f64::INFINITY);
        assert_eq!(parse_field(" -Infinity and beyond", 0.0), f64::NEG_INFINITY);
        assert_eq!(parse_field("+Infinity", 1.0), f64::INFINITY);
        assert_eq!(parse_field("1e400", 0.0), f64::INFINITY);
        // Only the exact spelling counts.
        assert_eq!(parse_field("inf", 0.0), 0.0);
        assert_eq!(parse_field("Infinit", 1.0), 1.0);
    }

    #[test]
    fn test_non_numeric_json_values_take_default() {
        let input: ExportMarginInput = serde_json::from_value(serde_json::json!({
            "selling_price": 100,
            "units": true,
            "shipping_cost": [5],
            "customs_cost": {"amount": 3},
        }))
        .unwrap();
        assert_eq!(input.units, 1.0);
        assert_eq!(input.shipping_cost, 0.0);
        assert_eq!(input.customs_cost, 0.0);
        assert_eq!(input.selling_price, 100.0);
    }

    #[test]
    fn test_zero_text_falls_back_to_default() {
        assert_eq!(parse_field("0", 1.0), 1.0);
        assert_eq!(parse_field("0.0", 0.0), 0.0);
    }

    #[test]
    fn test_roi_form_defaults_period_to_one_year() {
        let form = RoiForm {
            initial_investment: "1000".into(),
            final_value: "1200".into(),
            ..Default::default()
        };
        let input = RoiInput::from(&form);
        assert_eq!(input.time_period_years, 1.0);
        assert_eq!(input.additional_costs, 0.0);
    }

    #[test]
    fn test_export_form_units_default_to_one() {
        let form = ExportMarginForm {
            selling_price: "100".into(),
            product_cost: "40".into(),
            shipping_cost: "abc".into(),
            ..Default::default()
        };
        let input = ExportMarginInput::from(&form);
        assert_eq!(input.units, 1.0);
        assert_eq!(input.shipping_cost, 0.0);
        let result = compute_export_margin(&input);
        assert_eq!(result.total_export_margin, 60.0);
    }

    #[test]
    fn test_blank_forms() {
        assert_eq!(ProfitabilityInput::from(&ProfitabilityForm::default()), ProfitabilityInput::default());
        assert_eq!(BreakEvenInput::from(&BreakEvenForm::default()), BreakEvenInput::default());
    }
}
