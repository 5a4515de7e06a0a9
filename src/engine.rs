//! Batch evaluation engine.
//!
//! The `engine` module evaluates many calculator requests at once, for
//! example every scenario on a dashboard tab.  It uses the [`rayon`]
//! crate to spread the requests across CPU cores.  Each request is
//! independent and pure, so results come back in input order and are
//! identical to evaluating the requests one by one.

use crate::calculator::{
    compute_break_even, compute_export_margin, compute_profitability, compute_roi,
};
use crate::display::Summary;
use crate::error::MetricsError;
use crate::models::{
    BreakEvenInput, BreakEvenResult, ExportMarginInput, ExportMarginResult, ProfitabilityInput,
    ProfitabilityResult, RoiInput, RoiResult,
};
use crate::rating::Rating;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// One calculation to perform, tagged by calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "input", rename_all = "snake_case")]
pub enum CalculationRequest {
    Roi(RoiInput),
    Profitability(ProfitabilityInput),
    BreakEven(BreakEvenInput),
    ExportMargin(ExportMarginInput),
}

/// The result matching a [`CalculationRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum CalculationOutcome {
    Roi(RoiResult),
    Profitability(ProfitabilityResult),
    BreakEven(BreakEvenResult),
    ExportMargin(ExportMarginResult),
}

impl CalculationOutcome {
    pub fn status(&self) -> Rating {
        match self {
            CalculationOutcome::Roi(r) => r.status(),
            CalculationOutcome::Profitability(r) => r.status(),
            CalculationOutcome::BreakEven(r) => r.status(),
            CalculationOutcome::ExportMargin(r) => r.status(),
        }
    }
}

/// Input to [`run_batch`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchInput {
    pub requests: Vec<CalculationRequest>,
}

/// The aggregate result of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// One outcome per request, in request order.
    pub outcomes: Vec<CalculationOutcome>,
    /// Number of outcomes per rating.  Every rating is present, even
    /// with a zero count.
    pub ratings: BTreeMap<Rating, usize>,
}

/// Evaluate a single request.
pub fn evaluate(request: &CalculationRequest) -> CalculationOutcome {
    match request {
        CalculationRequest::Roi(input) => CalculationOutcome::Roi(compute_roi(input)),
        CalculationRequest::Profitability(input) => {
            CalculationOutcome::Profitability(compute_profitability(input))
        }
        CalculationRequest::BreakEven(input) => {
            CalculationOutcome::BreakEven(compute_break_even(input))
        }
        CalculationRequest::ExportMargin(input) => {
            CalculationOutcome::ExportMargin(compute_export_margin(input))
        }
    }
}

/// Evaluates every request in `input`.
///
/// Batches holding more than `max_batch` requests are rejected before
/// any work is done.
pub fn run_batch(input: BatchInput, max_batch: usize) -> Result<BatchResult, MetricsError> {
    let len = input.requests.len();
    if len > max_batch {
        warn!(len, max_batch, "rejecting oversized batch");
        return Err(MetricsError::BatchTooLarge { len, max: max_batch });
    }

    let outcomes: Vec<CalculationOutcome> = input.requests.par_iter().map(evaluate).collect();

    let mut ratings: BTreeMap<Rating, usize> = Rating::ALL.iter().map(|r| (*r, 0)).collect();
    for outcome in &outcomes {
        *ratings.entry(outcome.status()).or_insert(0) += 1;
    }
    debug!(len, ?ratings, "evaluated batch");

    Ok(BatchResult { outcomes, ratings })
}
