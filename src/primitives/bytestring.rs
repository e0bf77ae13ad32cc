//! Owned byte-string value type.

use std::fmt;
use std::ops::{Add, Index};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentirError};

/// An owned sequence of bytes with value semantics.
///
/// Every `clone` is a full independent duplicate; mutating one copy never
/// affects another. Equality and ordering are byte-wise: two strings are
/// equal iff their lengths and contents match, and ordering is lexicographic
/// with a shorter prefix sorting before the longer string.
///
/// The type is deliberately encoding-agnostic — CSV records and tweet text
/// are processed as raw bytes and never need to be valid UTF-8. Only
/// [`fmt::Display`] assumes (lossily) that the content is text.
///
/// # Examples
///
/// ```
/// use sentir::primitives::ByteString;
///
/// let hello = ByteString::from("hello");
/// let world = ByteString::from(" world");
/// let both = &hello + &world;
///
/// assert_eq!(both.len(), 11);
/// assert_eq!(both, ByteString::from("hello world"));
/// assert!(world < hello); // ' ' sorts before 'h'
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    /// Creates an empty string.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a string by copying a byte slice.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Returns the number of bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the string holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the content as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Appends a single byte.
    pub fn push(&mut self, byte: u8) {
        self.0.push(byte);
    }

    /// Returns the byte at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::IndexOutOfRange`] if `index` is past the end.
    pub fn byte_at(&self, index: usize) -> Result<u8> {
        self.0
            .get(index)
            .copied()
            .ok_or(SentirError::IndexOutOfRange {
                index,
                len: self.0.len(),
            })
    }

    /// Returns a new string holding `count` bytes starting at `start`.
    ///
    /// The contract is deliberately lenient, matching the rest of the text
    /// pipeline's skip-don't-fail policy: an out-of-range `start` or a
    /// non-positive `count` yields an empty string, and a `count` reaching
    /// past the end is silently truncated to the available length. This
    /// never returns an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::primitives::ByteString;
    ///
    /// let s = ByteString::from("hello world");
    /// assert_eq!(s.substring(6, 5), ByteString::from("world"));
    /// assert_eq!(s.substring(6, 100), ByteString::from("world"));
    /// assert_eq!(s.substring(-1, 5), ByteString::new());
    /// assert_eq!(s.substring(3, 0), ByteString::new());
    /// assert_eq!(s.substring(99, 5), ByteString::new());
    /// ```
    #[must_use]
    pub fn substring(&self, start: isize, count: isize) -> ByteString {
        if start < 0 || count <= 0 {
            return ByteString::new();
        }
        let start = start as usize;
        if start >= self.0.len() {
            return ByteString::new();
        }
        let available = self.0.len() - start;
        let take = (count as usize).min(available);
        ByteString(self.0[start..start + take].to_vec())
    }

    /// Returns a new string with ASCII `A`–`Z` mapped to lowercase.
    ///
    /// All other bytes pass through unchanged; there is no locale or Unicode
    /// awareness. Idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::primitives::ByteString;
    ///
    /// let s = ByteString::from("Hello WORLD!");
    /// assert_eq!(s.to_lowercase(), ByteString::from("hello world!"));
    /// ```
    #[must_use]
    pub fn to_lowercase(&self) -> ByteString {
        ByteString(self.0.iter().map(u8::to_ascii_lowercase).collect())
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for ByteString {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Add<&ByteString> for &ByteString {
    type Output = ByteString;

    /// Concatenation. Neither operand is mutated.
    fn add(self, rhs: &ByteString) -> ByteString {
        let mut out = Vec::with_capacity(self.0.len() + rhs.0.len());
        out.extend_from_slice(&self.0);
        out.extend_from_slice(&rhs.0);
        ByteString(out)
    }
}

impl Add for ByteString {
    type Output = ByteString;

    fn add(self, rhs: ByteString) -> ByteString {
        &self + &rhs
    }
}

impl Index<usize> for ByteString {
    type Output = u8;

    /// Panics on out-of-bounds access, like any slice index. For a
    /// recoverable variant use [`ByteString::byte_at`].
    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl fmt::Display for ByteString {
    /// Renders the content as text. Invalid UTF-8 is replaced lossily; file
    /// output paths that must be byte-exact write [`ByteString::as_bytes`]
    /// directly instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteString({:?})", String::from_utf8_lossy(&self.0))
    }
}

#[cfg(test)]
#[path = "bytestring_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_bytestring_contract.rs"]
mod contract_tests;
