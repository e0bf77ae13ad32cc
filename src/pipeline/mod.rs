//! The train → predict → evaluate driver over CSV files.
//!
//! Each stage is one blocking sequential pass over its input: handles are
//! opened at stage entry and dropped on every exit path, nothing is retried,
//! and the stages never run concurrently on one pipeline. Lines are read as
//! raw bytes, so records containing invalid UTF-8 flow through untouched.
//!
//! The first line of every file is assumed to be a header and skipped.
//! Lines with too few columns are skipped and counted, per the silent-skip
//! policy for malformed records; only a file that cannot be opened, read,
//! or written aborts a stage.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::classification::{FrequencyModel, PredictionTable, Sentiment};
use crate::data::{TestRecord, TrainingRecord, TruthRecord};
use crate::error::{Result, SentirError};
use crate::metrics::evaluation::{self, EvaluationReport};
use crate::primitives::ByteString;
use crate::text::{DelimiterTokenizer, Tokenizer};

/// Counters reported by one training pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingSummary {
    /// Records folded into the model
    pub records: u64,
    /// Lines skipped for having too few columns
    pub skipped: u64,
    /// Records labeled positive
    pub positive: u64,
    /// Records labeled negative
    pub negative: u64,
    /// Distinct tokens in the model after this pass
    pub vocabulary: usize,
}

/// Counters reported by one prediction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictionSummary {
    /// Records predicted and written out
    pub records: u64,
    /// Lines skipped for having too few columns
    pub skipped: u64,
}

/// Sentiment classifier driver: owns the model, the tokenizer, and the
/// predictions made so far.
///
/// The usual flow is `train`, then `predict`, then `evaluate`; `evaluate`
/// compares ground truth against whatever `predict` stored. Running a stage
/// twice accumulates (more training records, more predictions) rather than
/// resetting.
#[derive(Debug, Clone, Default)]
pub struct SentimentPipeline {
    model: FrequencyModel,
    tokenizer: DelimiterTokenizer,
    predictions: PredictionTable,
}

impl SentimentPipeline {
    /// Creates a pipeline with an untrained model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline around an existing model (e.g. one restored with
    /// [`FrequencyModel::load`]).
    #[must_use]
    pub fn with_model(model: FrequencyModel) -> Self {
        Self {
            model,
            tokenizer: DelimiterTokenizer::new(),
            predictions: PredictionTable::new(),
        }
    }

    /// The trained model.
    #[must_use]
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// Predictions stored by [`SentimentPipeline::predict`] so far.
    #[must_use]
    pub fn predictions(&self) -> &PredictionTable {
        &self.predictions
    }

    /// Trains the model from a labeled CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::Io`] naming the file if it cannot be opened or
    /// read. Malformed lines are not errors; they are counted in the
    /// summary.
    pub fn train<P: AsRef<Path>>(&mut self, path: P) -> Result<TrainingSummary> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SentirError::io(path, e))?;
        let mut reader = BufReader::new(file);

        let mut summary = TrainingSummary::default();
        let mut buf = Vec::new();
        let mut header_seen = false;

        while let Some(line) = read_record(&mut reader, &mut buf)
            .map_err(|e| SentirError::io(path, e))?
        {
            if !header_seen {
                header_seen = true;
                continue;
            }
            let Some(record) = TrainingRecord::parse(&line) else {
                summary.skipped += 1;
                continue;
            };

            let label = Sentiment::from_label_field(&record.label);
            let tokens = self.tokenizer.tokenize(&record.text);
            self.model.observe(&tokens, label);

            summary.records += 1;
            match label {
                Sentiment::Positive => summary.positive += 1,
                Sentiment::Negative => summary.negative += 1,
            }
        }

        summary.vocabulary = self.model.vocabulary_size();
        tracing::info!(
            records = summary.records,
            positive = summary.positive,
            negative = summary.negative,
            skipped = summary.skipped,
            vocabulary = summary.vocabulary,
            "training complete"
        );
        Ok(summary)
    }

    /// Predicts labels for a test CSV file, writing `<label>,<id>` lines to
    /// `out_path` and storing each prediction for later evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::Io`] naming the offending file if the input
    /// cannot be opened/read or the output cannot be created/written.
    pub fn predict<P, Q>(&mut self, test_path: P, out_path: Q) -> Result<PredictionSummary>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let test_path = test_path.as_ref();
        let out_path = out_path.as_ref();

        let file = File::open(test_path).map_err(|e| SentirError::io(test_path, e))?;
        let mut reader = BufReader::new(file);
        // Opened after the input so a create failure releases the input
        // handle on the way out.
        let out = File::create(out_path).map_err(|e| SentirError::io(out_path, e))?;
        let mut writer = BufWriter::new(out);

        let mut summary = PredictionSummary::default();
        let mut buf = Vec::new();
        let mut header_seen = false;

        while let Some(line) = read_record(&mut reader, &mut buf)
            .map_err(|e| SentirError::io(test_path, e))?
        {
            if !header_seen {
                header_seen = true;
                continue;
            }
            let Some(record) = TestRecord::parse(&line) else {
                summary.skipped += 1;
                continue;
            };

            let tokens = self.tokenizer.tokenize(&record.text);
            let label = self.model.predict(&tokens);

            write!(writer, "{label},").map_err(|e| SentirError::io(out_path, e))?;
            writer
                .write_all(record.id.as_bytes())
                .and_then(|()| writeln!(writer))
                .map_err(|e| SentirError::io(out_path, e))?;

            self.predictions.insert(record.id, label);
            summary.records += 1;
        }

        writer.flush().map_err(|e| SentirError::io(out_path, e))?;
        tracing::info!(
            records = summary.records,
            skipped = summary.skipped,
            "prediction complete"
        );
        Ok(summary)
    }

    /// Evaluates stored predictions against a ground-truth CSV file and
    /// writes the accuracy report to `out_path`.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::Io`] naming the offending file if the input
    /// cannot be opened/read or the output cannot be created/written.
    pub fn evaluate<P, Q>(&self, truth_path: P, out_path: Q) -> Result<EvaluationReport>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let truth_path = truth_path.as_ref();
        let out_path = out_path.as_ref();

        let file = File::open(truth_path).map_err(|e| SentirError::io(truth_path, e))?;
        let mut reader = BufReader::new(file);
        let out = File::create(out_path).map_err(|e| SentirError::io(out_path, e))?;
        let mut writer = BufWriter::new(out);

        let mut records = Vec::new();
        let mut buf = Vec::new();
        let mut header_seen = false;

        while let Some(line) = read_record(&mut reader, &mut buf)
            .map_err(|e| SentirError::io(truth_path, e))?
        {
            if !header_seen {
                header_seen = true;
                continue;
            }
            // Too-few-column lines skip silently, like the other stages
            if let Some(record) = TruthRecord::parse(&line) {
                records.push(record);
            }
        }

        let report = evaluation::evaluate(records, &self.predictions);
        report
            .write_to(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| SentirError::io(out_path, e))?;

        tracing::info!(
            correct = report.correct,
            total = report.total,
            misclassified = report.misclassifications.len(),
            accuracy = report.accuracy(),
            "evaluation complete"
        );
        Ok(report)
    }
}

/// Reads one record line as raw bytes, stripping the terminator (`\n`, and
/// a preceding `\r` if present). Returns `None` at end of input.
fn read_record(reader: &mut impl BufRead, buf: &mut Vec<u8>) -> io::Result<Option<ByteString>> {
    buf.clear();
    let n = reader.read_until(b'\n', buf)?;
    if n == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    Ok(Some(ByteString::from_bytes(buf)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_record_strips_lf_and_crlf() {
        let mut input = io::Cursor::new(b"one\r\ntwo\nthree".to_vec());
        let mut buf = Vec::new();

        let lines: Vec<String> = std::iter::from_fn(|| {
            read_record(&mut input, &mut buf)
                .expect("cursor reads cannot fail")
                .map(|l| l.to_string())
        })
        .collect();

        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_read_record_keeps_empty_lines() {
        let mut input = io::Cursor::new(b"a\n\nb\n".to_vec());
        let mut buf = Vec::new();
        let mut lines = Vec::new();
        while let Some(line) = read_record(&mut input, &mut buf).expect("cursor") {
            lines.push(line.len());
        }
        assert_eq!(lines, vec![1, 0, 1]);
    }

    #[test]
    fn test_train_missing_file_is_fatal_io_error() {
        let mut pipeline = SentimentPipeline::new();
        let err = pipeline
            .train("/no/such/training.csv")
            .expect_err("open must fail");
        assert!(matches!(err, SentirError::Io { .. }));
        assert!(err.to_string().contains("training.csv"));
    }
}
