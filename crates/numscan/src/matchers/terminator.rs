use alloc::{format, vec::Vec};
use core::ops::Range;

use crate::{
    error::{ErrorContext, ScanError, ScanErrorKind},
    rune_buffer::RuneBuffer,
};

/// Patterns that end a scan once at least one digit has been found.
///
/// An empty set never terminates a scan.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminatorSet {
    patterns: Vec<RuneBuffer>,
}

/// A terminator pattern found during a scan.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminatorMatch {
    pub pattern_index: usize,
    pub span: Range<usize>,
}

impl TerminatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set built from string patterns; empty patterns are rejected.
    pub fn from_strs<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ScanError> {
        let set: Self = patterns.iter().map(|p| RuneBuffer::from(p.as_ref())).collect();
        set.validate(&ErrorContext::new("TerminatorSet::from_strs"))?;
        Ok(set)
    }

    pub fn push(&mut self, pattern: RuneBuffer) {
        self.patterns.push(pattern);
    }

    pub fn patterns(&self) -> &[RuneBuffer] {
        &self.patterns
    }

    pub fn is_nop(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn validate(&self, ctx: &ErrorContext) -> Result<(), ScanError> {
        match self.patterns.iter().position(RuneBuffer::is_empty) {
            Some(index) => Err(ScanError::new(
                &ctx.child(format!("terminators[{index}]")),
                ScanErrorKind::InvalidTerminator {
                    index,
                    reason: "pattern is empty",
                },
            )),
            None => Ok(()),
        }
    }

    /// First pattern, in insertion order, occurring at `index` and ending by
    /// `end`.
    pub fn search(&self, target: &RuneBuffer, index: usize, end: usize) -> Option<TerminatorMatch> {
        self.patterns
            .iter()
            .enumerate()
            .find(|(_, p)| target.matches_at(p.as_slice(), index, end))
            .map(|(pattern_index, p)| TerminatorMatch {
                pattern_index,
                span: index..index + p.len(),
            })
    }
}

impl FromIterator<RuneBuffer> for TerminatorSet {
    fn from_iter<I: IntoIterator<Item = RuneBuffer>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pattern_in_order_wins() {
        let set = TerminatorSet::from_strs(&[" ", " USD"]).unwrap();
        let target = RuneBuffer::from("12 USD");
        assert_eq!(
            set.search(&target, 2, 6),
            Some(TerminatorMatch {
                pattern_index: 0,
                span: 2..3
            })
        );
        assert_eq!(set.search(&target, 3, 6), None);
    }

    #[test]
    fn empty_pattern_is_invalid() {
        let err = TerminatorSet::from_strs(&["x", ""]).unwrap_err();
        assert_eq!(
            err.kind(),
            &ScanErrorKind::InvalidTerminator {
                index: 1,
                reason: "pattern is empty"
            }
        );
        assert!(TerminatorSet::new().is_nop());
    }
}
