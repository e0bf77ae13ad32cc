//! Sentir: tweet sentiment classification with a word-frequency model.
//!
//! Sentir trains a signed word-frequency model from labeled CSV records,
//! predicts positive/negative sentiment for unlabeled records, and evaluates
//! those predictions against ground truth. Text is handled as raw bytes
//! throughout ([`ByteString`]), so records never need to be valid UTF-8.
//!
//! # Quick Start
//!
//! ```
//! use sentir::prelude::*;
//!
//! let tokenizer = DelimiterTokenizer::new();
//! let mut model = FrequencyModel::new();
//!
//! // Train on one positive and one negative record
//! let happy = tokenizer.tokenize(&ByteString::from("What a great day"));
//! let sad = tokenizer.tokenize(&ByteString::from("bad, bad service"));
//! model.observe(&happy, Sentiment::Positive);
//! model.observe(&sad, Sentiment::Negative);
//!
//! // Predict an unseen record
//! let tokens = tokenizer.tokenize(&ByteString::from("A GREAT time!"));
//! assert_eq!(model.predict(&tokens), Sentiment::Positive);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the [`ByteString`] owned byte-string value type
//! - [`data`]: CSV record parsing for the training/test/ground-truth formats
//! - [`text`]: tokenization (delimiter-based splitting, ASCII lowercasing)
//! - [`classification`]: the [`classification::FrequencyModel`] and labels
//! - [`metrics`]: accuracy and the misclassification report
//! - [`pipeline`]: the train → predict → evaluate driver over files
//! - [`cli`]: command-line argument definitions for the `sentir` binary
//! - [`logging`]: `tracing` subscriber setup for the binary
//!
//! [`ByteString`]: primitives::ByteString

pub mod classification;
pub mod cli;
pub mod data;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod prelude;
pub mod primitives;
pub mod text;

pub use error::{Result, SentirError};
pub use primitives::ByteString;
