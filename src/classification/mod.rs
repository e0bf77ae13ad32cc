//! Sentiment labels and the word-frequency classification model.
//!
//! # Example
//!
//! ```
//! use sentir::classification::{FrequencyModel, Sentiment};
//! use sentir::primitives::ByteString;
//!
//! let mut model = FrequencyModel::new();
//! let great = vec![ByteString::from("great")];
//! let bad = vec![ByteString::from("bad")];
//!
//! model.observe(&great, Sentiment::Positive);
//! model.observe(&bad, Sentiment::Negative);
//!
//! assert_eq!(model.predict(&great), Sentiment::Positive);
//! // Unseen vocabulary scores 0, and 0 resolves to Negative
//! assert_eq!(model.predict(&[ByteString::from("unseen")]), Sentiment::Negative);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentirError};
use crate::primitives::ByteString;

/// Tokens shorter than this many bytes are discarded as noise during
/// training (strictly shorter: single-byte tokens never enter the model).
pub const MIN_TOKEN_LEN: usize = 2;

/// A two-valued sentiment label.
///
/// Renders as the Sentiment140 sentinel values: `4` for positive, `0` for
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    /// Negative sentiment (sentinel `0`)
    Negative,
    /// Positive sentiment (sentinel `4`)
    Positive,
}

impl Sentiment {
    /// Derives a label from a raw CSV label field.
    ///
    /// The field is positive iff its first byte is `'4'`. Anything else —
    /// `0`, garbage, or an empty field — degrades to negative, never an
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::classification::Sentiment;
    /// use sentir::primitives::ByteString;
    ///
    /// assert_eq!(Sentiment::from_label_field(&ByteString::from("4")), Sentiment::Positive);
    /// assert_eq!(Sentiment::from_label_field(&ByteString::from("0")), Sentiment::Negative);
    /// assert_eq!(Sentiment::from_label_field(&ByteString::new()), Sentiment::Negative);
    /// ```
    #[must_use]
    pub fn from_label_field(field: &ByteString) -> Self {
        match field.as_bytes().first() {
            Some(b'4') => Sentiment::Positive,
            _ => Sentiment::Negative,
        }
    }

    /// Returns the sentinel value: 4 for positive, 0 for negative.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Sentiment::Positive => 4,
            Sentiment::Negative => 0,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Predictions made for one test pass: record id → predicted label.
///
/// Ids are unique per table; a later prediction for the same id replaces the
/// earlier one.
pub type PredictionTable = BTreeMap<ByteString, Sentiment>;

/// Occurrence counts for one vocabulary entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    /// Occurrences in positive records
    pub positive: u32,
    /// Occurrences in negative records
    pub negative: u32,
}

impl SentimentCounts {
    /// Signed contribution of this entry to a record score.
    #[must_use]
    pub fn signed(self) -> i64 {
        i64::from(self.positive) - i64::from(self.negative)
    }
}

/// Word-frequency sentiment model.
///
/// Training accumulates, per token, how often it appeared in positive and in
/// negative records. Scoring sums the signed difference over a record's
/// tokens; a score greater than zero predicts positive, anything else —
/// including the exact-zero tie and every token being unseen — predicts
/// negative. None of the operations can fail; an untrained model is simply
/// an always-negative classifier.
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    counts: BTreeMap<ByteString, SentimentCounts>,
    positive_records: u64,
    negative_records: u64,
}

impl FrequencyModel {
    /// Creates an empty (untrained) model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one labeled, tokenized record into the model.
    ///
    /// Tokens shorter than [`MIN_TOKEN_LEN`] bytes are skipped. Entries are
    /// created on first sight with both counts at zero, then bumped on the
    /// side matching `label`.
    pub fn observe(&mut self, tokens: &[ByteString], label: Sentiment) {
        match label {
            Sentiment::Positive => self.positive_records += 1,
            Sentiment::Negative => self.negative_records += 1,
        }

        for token in tokens {
            if token.len() < MIN_TOKEN_LEN {
                continue;
            }
            let entry = self.counts.entry(token.clone()).or_default();
            match label {
                Sentiment::Positive => entry.positive += 1,
                Sentiment::Negative => entry.negative += 1,
            }
        }
    }

    /// Scores a tokenized record: Σ (positive − negative) over the tokens
    /// present in the vocabulary. Unseen tokens contribute 0.
    #[must_use]
    pub fn score(&self, tokens: &[ByteString]) -> i64 {
        tokens
            .iter()
            .filter_map(|token| self.counts.get(token))
            .map(|counts| counts.signed())
            .sum()
    }

    /// Predicts a label for a tokenized record.
    ///
    /// Positive iff the score is strictly greater than zero; an exact zero
    /// resolves to negative (the documented tie-break).
    #[must_use]
    pub fn predict(&self, tokens: &[ByteString]) -> Sentiment {
        if self.score(tokens) > 0 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }

    /// Returns the counts recorded for `token`, if it has been seen.
    #[must_use]
    pub fn lookup(&self, token: &ByteString) -> Option<SentimentCounts> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens in the vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }

    /// Number of positive records observed.
    #[must_use]
    pub fn positive_records(&self) -> u64 {
        self.positive_records
    }

    /// Number of negative records observed.
    #[must_use]
    pub fn negative_records(&self) -> u64 {
        self.negative_records
    }

    /// Writes the model to `path` as a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::Io`] if the file cannot be created and
    /// [`SentirError::Serialization`] if encoding fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| SentirError::io(path, e))?;
        let snapshot = ModelSnapshot::from(self);
        serde_json::to_writer(BufWriter::new(file), &snapshot)
            .map_err(|e| SentirError::Serialization(e.to_string()))
    }

    /// Reads a model previously written with [`FrequencyModel::save`].
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::Io`] if the file cannot be opened and
    /// [`SentirError::Serialization`] if decoding fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SentirError::io(path, e))?;
        let snapshot: ModelSnapshot = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| SentirError::Serialization(e.to_string()))?;
        Ok(snapshot.into_model())
    }
}

/// On-disk form of a [`FrequencyModel`]. Tokens are byte sequences, so the
/// snapshot survives vocabulary that is not valid UTF-8.
#[derive(Serialize, Deserialize)]
struct ModelSnapshot {
    positive_records: u64,
    negative_records: u64,
    vocabulary: Vec<SnapshotEntry>,
}

#[derive(Serialize, Deserialize)]
struct SnapshotEntry {
    token: ByteString,
    counts: SentimentCounts,
}

impl From<&FrequencyModel> for ModelSnapshot {
    fn from(model: &FrequencyModel) -> Self {
        Self {
            positive_records: model.positive_records,
            negative_records: model.negative_records,
            vocabulary: model
                .counts
                .iter()
                .map(|(token, &counts)| SnapshotEntry {
                    token: token.clone(),
                    counts,
                })
                .collect(),
        }
    }
}

impl ModelSnapshot {
    fn into_model(self) -> FrequencyModel {
        FrequencyModel {
            counts: self
                .vocabulary
                .into_iter()
                .map(|entry| (entry.token, entry.counts))
                .collect(),
            positive_records: self.positive_records,
            negative_records: self.negative_records,
        }
    }
}

#[cfg(test)]
mod tests;
