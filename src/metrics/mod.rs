//! Evaluation metrics for sentiment predictions.
//!
//! The single headline metric is accuracy; [`evaluation`] pairs it with the
//! misclassification list that the accuracy report file carries.

pub mod evaluation;

pub use evaluation::{evaluate, EvaluationReport, Misclassification};

/// Computes accuracy as `correct / total`.
///
/// Defined as 0.0 when `total` is zero — an evaluation that matched nothing
/// is reported as all-wrong rather than crashing on a division by zero.
///
/// # Examples
///
/// ```
/// use sentir::metrics::accuracy;
///
/// assert!((accuracy(3, 4) - 0.75).abs() < 1e-9);
/// assert_eq!(accuracy(0, 0), 0.0);
/// ```
#[must_use]
pub fn accuracy(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64
}
