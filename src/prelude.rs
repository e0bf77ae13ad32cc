//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sentir::prelude::*;
//! ```

pub use crate::classification::{FrequencyModel, PredictionTable, Sentiment};
pub use crate::data::{split_record, TestRecord, TrainingRecord, TruthRecord};
pub use crate::error::{Result, SentirError};
pub use crate::metrics::{evaluate, EvaluationReport, Misclassification};
pub use crate::pipeline::SentimentPipeline;
pub use crate::primitives::ByteString;
pub use crate::text::{DelimiterTokenizer, Tokenizer};
