//! Comparing predictions against ground truth.

use std::io::{self, Write};

use crate::classification::{PredictionTable, Sentiment};
use crate::data::TruthRecord;
use crate::metrics::accuracy;
use crate::primitives::ByteString;

/// One record the model got wrong: what was predicted, what was true, and
/// which record it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misclassification {
    /// Label the model predicted
    pub predicted: Sentiment,
    /// Label from the ground-truth file
    pub actual: Sentiment,
    /// Record identifier
    pub id: ByteString,
}

/// Outcome of comparing a prediction table against ground truth.
#[derive(Debug, Clone, Default)]
pub struct EvaluationReport {
    /// Ground-truth records whose prediction matched
    pub correct: usize,
    /// Ground-truth records that had a prediction at all
    pub total: usize,
    /// Mismatches, in ground-truth encounter order
    pub misclassifications: Vec<Misclassification>,
}

impl EvaluationReport {
    /// Fraction of matched records predicted correctly; 0.0 when nothing
    /// matched.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        accuracy(self.correct, self.total)
    }

    /// Renders the accuracy report: first line is accuracy to exactly three
    /// decimal places, followed by one `<predicted>,<actual>,<id>` line per
    /// misclassification, in encounter order.
    ///
    /// Identifiers are written byte-exact, so the report round-trips ids
    /// that are not valid UTF-8.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{:.3}", self.accuracy())?;
        for miss in &self.misclassifications {
            write!(writer, "{},{},", miss.predicted, miss.actual)?;
            writer.write_all(miss.id.as_bytes())?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

/// Compares ground-truth records against a prediction table.
///
/// Records whose id has no prediction are silently skipped — they count
/// toward neither total nor correct. When nothing matches at all, the
/// report's accuracy is 0.0 and a warning is emitted (never a panic).
///
/// # Examples
///
/// ```
/// use sentir::classification::{PredictionTable, Sentiment};
/// use sentir::data::TruthRecord;
/// use sentir::metrics::evaluate;
/// use sentir::primitives::ByteString;
///
/// let mut predictions = PredictionTable::new();
/// predictions.insert(ByteString::from("id1"), Sentiment::Positive);
///
/// let truth = vec![TruthRecord {
///     label: ByteString::from("4"),
///     id: ByteString::from("id1"),
/// }];
///
/// let report = evaluate(truth, &predictions);
/// assert_eq!(report.total, 1);
/// assert_eq!(report.correct, 1);
/// assert!((report.accuracy() - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn evaluate<I>(truth: I, predictions: &PredictionTable) -> EvaluationReport
where
    I: IntoIterator<Item = TruthRecord>,
{
    let mut report = EvaluationReport::default();

    for record in truth {
        let Some(&predicted) = predictions.get(&record.id) else {
            continue;
        };
        let actual = Sentiment::from_label_field(&record.label);

        report.total += 1;
        if predicted == actual {
            report.correct += 1;
        } else {
            report.misclassifications.push(Misclassification {
                predicted,
                actual,
                id: record.id,
            });
        }
    }

    if report.total == 0 {
        tracing::warn!(
            "no ground-truth records matched any prediction; check that the \
             files share record ids"
        );
    }

    report
}
