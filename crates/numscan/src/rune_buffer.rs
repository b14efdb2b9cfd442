use alloc::{string::String, vec::Vec};
use core::{fmt, ops::Range};

use crate::error::{ErrorContext, ScanError, ScanErrorKind};

/// An owned, resizable array of characters.
///
/// Every element is a Unicode scalar value; the fallible constructors
/// ([`RuneBuffer::from_utf8`], [`RuneBuffer::from_code_points`]) reject input
/// that would break this.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", from = "String")
)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RuneBuffer {
    chars: Vec<char>,
}

impl RuneBuffer {
    pub fn new() -> Self {
        Self { chars: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
        }
    }

    /// Decodes UTF-8 bytes, failing at the first invalid sequence.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, ScanError> {
        let mut chars = Vec::with_capacity(bytes.len());
        let mut offset = 0;
        while offset < bytes.len() {
            let (ch, len) = bstr::decode_utf8(&bytes[offset..]);
            match ch {
                Some(ch) => chars.push(ch),
                None => {
                    return Err(ScanError::new(
                        &ErrorContext::new("RuneBuffer::from_utf8"),
                        ScanErrorKind::InvalidUtf8 { offset },
                    ));
                }
            }
            offset += len;
        }
        Ok(Self { chars })
    }

    /// Builds a buffer from raw code points, rejecting surrogates and values
    /// above `U+10FFFF`.
    pub fn from_code_points(code_points: &[u32]) -> Result<Self, ScanError> {
        code_points
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                char::from_u32(value).ok_or_else(|| {
                    ScanError::new(
                        &ErrorContext::new("RuneBuffer::from_code_points"),
                        ScanErrorKind::InvalidCodePoint { index, value },
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|chars| Self { chars })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn push(&mut self, ch: char) {
        self.chars.push(ch);
    }

    pub fn insert(&mut self, index: usize, ch: char) {
        self.chars.insert(index, ch);
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// Replaces the contents of `self` with a copy of `other`.
    pub fn copy_from(&mut self, other: &RuneBuffer) {
        self.chars.clear();
        self.chars.extend_from_slice(&other.chars);
    }

    /// Owned copy of `range`, clamped to the buffer bounds.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> RuneBuffer {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        Self {
            chars: self.chars[start..end].to_vec(),
        }
    }

    /// Owned copy of everything from `from` to the end.
    #[must_use]
    pub fn tail(&self, from: usize) -> RuneBuffer {
        self.slice(from..self.chars.len())
    }

    /// Whether `pattern` occurs at `index` and ends at or before `end`.
    ///
    /// An empty pattern never matches.
    pub fn matches_at(&self, pattern: &[char], index: usize, end: usize) -> bool {
        let end = end.min(self.chars.len());
        match index.checked_add(pattern.len()) {
            Some(stop) if !pattern.is_empty() && stop <= end => {
                self.chars[index..stop] == *pattern
            }
            _ => false,
        }
    }

    pub fn count_leading_zeros(&self) -> usize {
        self.chars.iter().take_while(|&&c| c == '0').count()
    }

    pub fn count_trailing_zeros(&self) -> usize {
        self.chars.iter().rev().take_while(|&&c| c == '0').count()
    }

    /// Removes `count` characters from the front (`trailing == false`) or the
    /// back (`trailing == true`).
    pub fn drain_edge(&mut self, count: usize, trailing: bool) {
        let count = count.min(self.chars.len());
        if trailing {
            self.chars.truncate(self.chars.len() - count);
        } else {
            self.chars.drain(..count);
        }
    }

    /// Whether any ASCII decimal digit is present.
    pub fn contains_ascii_digit(&self) -> bool {
        self.chars.iter().any(char::is_ascii_digit)
    }
}

impl fmt::Display for RuneBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for &ch in &self.chars {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

impl From<&str> for RuneBuffer {
    fn from(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

impl From<String> for RuneBuffer {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<Vec<char>> for RuneBuffer {
    fn from(chars: Vec<char>) -> Self {
        Self { chars }
    }
}

impl From<&[char]> for RuneBuffer {
    fn from(chars: &[char]) -> Self {
        Self {
            chars: chars.to_vec(),
        }
    }
}

impl From<RuneBuffer> for String {
    fn from(buffer: RuneBuffer) -> Self {
        buffer.chars.into_iter().collect()
    }
}

impl FromIterator<char> for RuneBuffer {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for RuneBuffer {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.chars.extend(iter);
    }
}

impl PartialEq<str> for RuneBuffer {
    fn eq(&self, other: &str) -> bool {
        self.chars.iter().copied().eq(other.chars())
    }
}

impl PartialEq<&str> for RuneBuffer {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}
