/// Where a scan starts and how far it may look.
///
/// # Examples
///
/// ```rust
/// use numscan::{ExtractOptions, SearchLength};
///
/// let options = ExtractOptions {
///     start_index: 4,
///     search_length: SearchLength::Limited(10),
///     request_remainder: true,
/// };
/// assert_eq!(options.effective_end(20), 14);
/// ```
///
/// # Default
///
/// Scan the whole target from index `0` without returning the remainder.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Index of the first character examined.
    ///
    /// # Default
    ///
    /// `0`
    pub start_index: usize,

    /// Maximum number of characters examined, counted from `start_index`.
    ///
    /// A limit reaching past the end of the target is clamped to it.
    ///
    /// # Default
    ///
    /// [`SearchLength::Unbounded`]
    pub search_length: SearchLength,

    /// Whether to copy the unexamined tail of the target into the results.
    ///
    /// # Default
    ///
    /// `false`
    pub request_remainder: bool,
}

/// Limit on the number of characters a scan may examine.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchLength {
    /// Scan to the end of the target.
    #[default]
    Unbounded,
    /// Scan at most this many characters. Zero is rejected at scan time.
    Limited(usize),
}

impl ExtractOptions {
    /// Options scanning the whole target from `start_index`.
    pub fn from_index(start_index: usize) -> Self {
        Self {
            start_index,
            ..Self::default()
        }
    }

    /// Exclusive end index for a target of `len` characters.
    pub fn effective_end(&self, len: usize) -> usize {
        match self.search_length {
            SearchLength::Unbounded => len,
            SearchLength::Limited(limit) => self.start_index.saturating_add(limit).min(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_clamped_to_target() {
        let opts = ExtractOptions {
            start_index: 3,
            search_length: SearchLength::Limited(usize::MAX),
            request_remainder: false,
        };
        assert_eq!(opts.effective_end(8), 8);
        assert_eq!(ExtractOptions::from_index(2).effective_end(5), 5);
    }
}
