//! CSV record parsing for the Sentiment140-style file formats.
//!
//! One record is one line with comma-separated fields; a field may be
//! wrapped in double quotes so its text can contain commas. Parsing never
//! fails: quote characters toggle an in-quotes flag and are dropped from the
//! output (doubled quotes are not unescaped — the format is lossy by
//! design), and malformed quoting degrades into merged or split fields.
//! Records with too few fields are skipped by the typed views, not rejected
//! with an error.
//!
//! Three schemas are supported:
//!
//! | file          | columns                          | text column |
//! |---------------|----------------------------------|-------------|
//! | training      | `label,id,date,query,user,text`  | 5           |
//! | test          | `id,date,query,user,text`        | 4           |
//! | ground truth  | `label,id`                       | —           |
//!
//! The ground-truth column order (label before id) intentionally differs
//! from the training format and must not be "fixed".

use std::mem;

use crate::primitives::ByteString;

/// Minimum column count for one training record.
pub const TRAINING_FIELDS: usize = 6;
/// Minimum column count for one test record.
pub const TEST_FIELDS: usize = 5;
/// Minimum column count for one ground-truth record.
pub const TRUTH_FIELDS: usize = 2;

/// Column holding the tweet text in a training record.
const TRAINING_TEXT_COLUMN: usize = 5;
/// Column holding the tweet text in a test record.
const TEST_TEXT_COLUMN: usize = 4;

/// Splits one record line into its fields.
///
/// Scans byte by byte: a `"` toggles the in-quotes flag and is dropped, a
/// `,` outside quotes ends the current field, every other byte is appended
/// to the current field. The final field is always emitted, even when empty,
/// so the field count is always one more than the number of unquoted commas.
///
/// # Examples
///
/// ```
/// use sentir::data::split_record;
/// use sentir::primitives::ByteString;
///
/// let line = ByteString::from(r#"4,1468,"Mon, 6am",q,user,"I love it""#);
/// let fields = split_record(&line);
/// assert_eq!(fields.len(), 6);
/// assert_eq!(fields[2], ByteString::from("Mon, 6am"));
/// assert_eq!(fields[5], ByteString::from("I love it"));
/// ```
#[must_use]
pub fn split_record(line: &ByteString) -> Vec<ByteString> {
    let mut fields = Vec::new();
    let mut current = ByteString::new();
    let mut in_quotes = false;

    for &byte in line.as_bytes() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b',' if !in_quotes => fields.push(mem::take(&mut current)),
            _ => current.push(byte),
        }
    }
    fields.push(current);
    fields
}

/// One labeled training record: raw label field, record id, tweet text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRecord {
    /// Raw label field; interpret with `Sentiment::from_label_field`
    pub label: ByteString,
    /// Opaque record identifier
    pub id: ByteString,
    /// Tweet text, ready for tokenization
    pub text: ByteString,
}

impl TrainingRecord {
    /// Parses one training line. Returns `None` when the line has fewer than
    /// [`TRAINING_FIELDS`] columns (the silent-skip policy for malformed
    /// records). Extra columns beyond the text column are ignored.
    #[must_use]
    pub fn parse(line: &ByteString) -> Option<Self> {
        let mut fields = split_record(line);
        if fields.len() < TRAINING_FIELDS {
            return None;
        }
        Some(Self {
            label: mem::take(&mut fields[0]),
            id: mem::take(&mut fields[1]),
            text: mem::take(&mut fields[TRAINING_TEXT_COLUMN]),
        })
    }
}

/// One unlabeled test record: record id and tweet text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    /// Opaque record identifier
    pub id: ByteString,
    /// Tweet text, ready for tokenization
    pub text: ByteString,
}

impl TestRecord {
    /// Parses one test line. Returns `None` when the line has fewer than
    /// [`TEST_FIELDS`] columns.
    #[must_use]
    pub fn parse(line: &ByteString) -> Option<Self> {
        let mut fields = split_record(line);
        if fields.len() < TEST_FIELDS {
            return None;
        }
        Some(Self {
            id: mem::take(&mut fields[0]),
            text: mem::take(&mut fields[TEST_TEXT_COLUMN]),
        })
    }
}

/// One ground-truth record: raw label field and record id.
///
/// Label comes first, then the id — the reverse of what the other formats
/// might suggest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthRecord {
    /// Raw label field
    pub label: ByteString,
    /// Opaque record identifier
    pub id: ByteString,
}

impl TruthRecord {
    /// Parses one ground-truth line. Returns `None` when the line has fewer
    /// than [`TRUTH_FIELDS`] columns.
    #[must_use]
    pub fn parse(line: &ByteString) -> Option<Self> {
        let mut fields = split_record(line);
        if fields.len() < TRUTH_FIELDS {
            return None;
        }
        Some(Self {
            label: mem::take(&mut fields[0]),
            id: mem::take(&mut fields[1]),
        })
    }
}
