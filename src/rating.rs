//! Four-tier qualitative rating shared by every calculator.
//!
//! Each calculator classifies one key ratio against three fixed
//! cut-offs.  The comparisons are strict: a ratio sitting exactly on a
//! cut-off falls into the lower tier.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Cut-offs for one calculator, highest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

/// ROI percent.
pub const ROI_THRESHOLDS: Thresholds = Thresholds { excellent: 20.0, good: 10.0, fair: 0.0 };
/// Net margin percent.
pub const PROFITABILITY_THRESHOLDS: Thresholds = Thresholds { excellent: 15.0, good: 10.0, fair: 5.0 };
/// Contribution margin ratio percent.
pub const BREAK_EVEN_THRESHOLDS: Thresholds = Thresholds { excellent: 50.0, good: 30.0, fair: 15.0 };
/// Export margin percent.
pub const EXPORT_MARGIN_THRESHOLDS: Thresholds = Thresholds { excellent: 25.0, good: 15.0, fair: 5.0 };

impl Thresholds {
    /// Classify `value`.  `NaN` compares false against every cut-off
    /// and therefore rates [`Rating::Poor`].
    pub fn classify(&self, value: f64) -> Rating {
        if value > self.excellent {
            Rating::Excellent
        } else if value > self.good {
            Rating::Good
        } else if value > self.fair {
            Rating::Fair
        } else {
            Rating::Poor
        }
    }
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::Excellent, Rating::Good, Rating::Fair, Rating::Poor];

    /// Colour the dashboard uses for the status badge.
    pub fn color(self) -> &'static str {
        match self {
            Rating::Excellent => "green",
            Rating::Good => "blue",
            Rating::Fair => "yellow",
            Rating::Poor => "red",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Fair => "Fair",
            Rating::Poor => "Poor",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_strict() {
        assert_eq!(ROI_THRESHOLDS.classify(20.0), Rating::Good);
        assert_eq!(ROI_THRESHOLDS.classify(20.01), Rating::Excellent);
        assert_eq!(ROI_THRESHOLDS.classify(10.0), Rating::Fair);
        assert_eq!(ROI_THRESHOLDS.classify(0.0), Rating::Poor);
        assert_eq!(EXPORT_MARGIN_THRESHOLDS.classify(5.0), Rating::Poor);
        assert_eq!(BREAK_EVEN_THRESHOLDS.classify(30.5), Rating::Good);
    }

    #[test]
    fn test_every_cut_off() {
        // (thresholds, [excellent, good, fair]) with the literal cut-offs.
        let table = [
            (ROI_THRESHOLDS, [20.0, 10.0, 0.0]),
            (PROFITABILITY_THRESHOLDS, [15.0, 10.0, 5.0]),
            (BREAK_EVEN_THRESHOLDS, [50.0, 30.0, 15.0]),
            (EXPORT_MARGIN_THRESHOLDS, [25.0, 15.0, 5.0]),
        ];
        let eps = 0.01;
        for (thresholds, [excellent, good, fair]) in table {
            assert_eq!(thresholds.classify(excellent + eps), Rating::Excellent);
            assert_eq!(thresholds.classify(excellent), Rating::Good);
            assert_eq!(thresholds.classify(excellent - eps), Rating::Good);
            assert_eq!(thresholds.classify(good + eps), Rating::Good);
            assert_eq!(thresholds.classify(good), Rating::Fair);
            assert_eq!(thresholds.classify(good - eps), Rating::Fair);
            assert_eq!(thresholds.classify(fair + eps), Rating::Fair);
            assert_eq!(thresholds.classify(fair), Rating::Poor);
            assert_eq!(thresholds.classify(fair - eps), Rating::Poor);
        }
    }

    #[test]
    fn test_nan_and_infinity() {
        assert_eq!(PROFITABILITY_THRESHOLDS.classify(f64::NAN), Rating::Poor);
        assert_eq!(PROFITABILITY_THRESHOLDS.classify(f64::INFINITY), Rating::Excellent);
        assert_eq!(PROFITABILITY_THRESHOLDS.classify(f64::NEG_INFINITY), Rating::Poor);
    }

    #[test]
    fn test_colors() {
        let colors: Vec<_> = Rating::ALL.iter().map(|r| r.color()).collect();
        assert_eq!(colors, vec!["green", "blue", "yellow", "red"]);
        assert_eq!(Rating::Fair.to_string(), "Fair");
    }
}
