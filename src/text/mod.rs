//! Text processing: tokenization of tweet text.
//!
//! Tokenization is deterministic and infallible — every input, including an
//! empty field or one made entirely of delimiters, produces a (possibly
//! empty) token sequence.

pub mod tokenize;

pub use tokenize::DelimiterTokenizer;

use crate::primitives::ByteString;

/// Trait for tokenization strategies.
///
/// Implementations split one text field into an ordered sequence of word
/// tokens. There is no failure mode.
///
/// # Examples
///
/// ```
/// use sentir::text::{DelimiterTokenizer, Tokenizer};
/// use sentir::primitives::ByteString;
///
/// let tokenizer = DelimiterTokenizer::new();
/// let tokens = tokenizer.tokenize(&ByteString::from("Hello, World!!"));
/// assert_eq!(
///     tokens,
///     vec![ByteString::from("hello"), ByteString::from("world")]
/// );
/// ```
pub trait Tokenizer {
    /// Splits a text field into word tokens.
    fn tokenize(&self, text: &ByteString) -> Vec<ByteString>;
}
