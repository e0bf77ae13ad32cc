//! Delimiter-based word tokenization.

use crate::primitives::ByteString;
use crate::text::Tokenizer;

/// Bytes that end a word: space plus the tweet punctuation set.
pub const DELIMITERS: &[u8] = b" ,.!?;:\"'()[]{}@#$%^&*-_=+<>/\\|~`";

fn is_delimiter(byte: u8) -> bool {
    DELIMITERS.contains(&byte)
}

/// Tokenizer that lowercases a field and splits it on a fixed delimiter set.
///
/// The whole field is lowercased first (ASCII only, via
/// [`ByteString::to_lowercase`]), then scanned byte by byte: runs of
/// non-delimiter bytes become tokens. Zero-length runs are never emitted,
/// and a run terminated by end-of-input is emitted like any other.
///
/// # Examples
///
/// ```
/// use sentir::text::{DelimiterTokenizer, Tokenizer};
/// use sentir::primitives::ByteString;
///
/// let tokenizer = DelimiterTokenizer::new();
///
/// // Punctuation splits and is dropped; case is normalized
/// let tokens = tokenizer.tokenize(&ByteString::from("Can't stop, won't stop"));
/// let words: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
/// assert_eq!(words, vec!["can", "t", "stop", "won", "t", "stop"]);
///
/// // Only delimiters: empty token sequence
/// assert!(tokenizer.tokenize(&ByteString::from("... !!! ...")).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DelimiterTokenizer;

impl DelimiterTokenizer {
    /// Creates a new tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for DelimiterTokenizer {
    fn tokenize(&self, text: &ByteString) -> Vec<ByteString> {
        let lowered = text.to_lowercase();

        let mut tokens = Vec::new();
        let mut current = ByteString::new();

        for &byte in lowered.as_bytes() {
            if is_delimiter(byte) {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            } else {
                current.push(byte);
            }
        }
        // A run ended by end-of-input is still a token
        if !current.is_empty() {
            tokens.push(current);
        }

        tokens
    }
}
