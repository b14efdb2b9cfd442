//! Negative number sign symbols and the per-scan search over them.
//!
//! A collection is consulted in order; the first spec that matches at the
//! current position wins. Leading-only specs are tried before the first digit,
//! trailing-only specs after it. Enclosing specs (`(123)`) match in two
//! halves: the opening half is consumed before any digit and only recorded,
//! the closing half confirms the sign once digits were seen.

use alloc::{format, vec, vec::Vec};
use core::ops::Range;

use crate::{
    error::{ErrorContext, ScanError, ScanErrorKind},
    kinds::SignPosition,
    rune_buffer::RuneBuffer,
};

/// One negative number sign convention.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegativeSignSpec {
    /// Symbol placed before the digits, e.g. `-123`.
    Leading(RuneBuffer),
    /// Symbol placed after the digits, e.g. `123-`.
    Trailing(RuneBuffer),
    /// Symbols enclosing the digits, e.g. `(123)`.
    LeadingAndTrailing {
        leading: RuneBuffer,
        trailing: RuneBuffer,
    },
}

impl NegativeSignSpec {
    pub fn leading(symbol: &str) -> Result<Self, ScanError> {
        let spec = Self::Leading(symbol.into());
        spec.validate(&ErrorContext::new("NegativeSignSpec::leading"), 0)?;
        Ok(spec)
    }

    pub fn trailing(symbol: &str) -> Result<Self, ScanError> {
        let spec = Self::Trailing(symbol.into());
        spec.validate(&ErrorContext::new("NegativeSignSpec::trailing"), 0)?;
        Ok(spec)
    }

    pub fn leading_and_trailing(leading: &str, trailing: &str) -> Result<Self, ScanError> {
        let spec = Self::LeadingAndTrailing {
            leading: leading.into(),
            trailing: trailing.into(),
        };
        spec.validate(
            &ErrorContext::new("NegativeSignSpec::leading_and_trailing"),
            0,
        )?;
        Ok(spec)
    }

    pub fn position(&self) -> SignPosition {
        match self {
            NegativeSignSpec::Leading(_) => SignPosition::Before,
            NegativeSignSpec::Trailing(_) => SignPosition::After,
            NegativeSignSpec::LeadingAndTrailing { .. } => SignPosition::BeforeAndAfter,
        }
    }

    /// Checks that every symbol is non-empty and digit free. `index` is the
    /// position of this spec inside its collection, used in the error.
    pub fn validate(&self, ctx: &ErrorContext, index: usize) -> Result<(), ScanError> {
        let check = |symbol: &RuneBuffer, which: &'static str| {
            let reason = if symbol.is_empty() {
                Some(which)
            } else if symbol.contains_ascii_digit() {
                Some("sign symbols may not contain digits")
            } else {
                None
            };
            match reason {
                Some(reason) => Err(ScanError::new(
                    ctx,
                    ScanErrorKind::InvalidNegativeSign { index, reason },
                )),
                None => Ok(()),
            }
        };
        match self {
            NegativeSignSpec::Leading(symbol) => check(symbol, "leading symbol is empty"),
            NegativeSignSpec::Trailing(symbol) => check(symbol, "trailing symbol is empty"),
            NegativeSignSpec::LeadingAndTrailing { leading, trailing } => {
                check(leading, "leading symbol is empty")?;
                check(trailing, "trailing symbol is empty")
            }
        }
    }
}

/// Ordered negative sign conventions; order is priority.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NegativeSignCollection {
    specs: Vec<NegativeSignSpec>,
}

impl NegativeSignCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leading `-`, then `(` … `)`.
    pub fn united_states() -> Self {
        Self {
            specs: vec![
                NegativeSignSpec::Leading("-".into()),
                NegativeSignSpec::LeadingAndTrailing {
                    leading: "(".into(),
                    trailing: ")".into(),
                },
            ],
        }
    }

    /// Trailing `-`.
    pub fn german() -> Self {
        Self {
            specs: vec![NegativeSignSpec::Trailing("-".into())],
        }
    }

    /// Leading `-`.
    pub fn french() -> Self {
        Self {
            specs: vec![NegativeSignSpec::Leading("-".into())],
        }
    }

    pub fn push(&mut self, spec: NegativeSignSpec) {
        self.specs.push(spec);
    }

    #[must_use]
    pub fn with(mut self, spec: NegativeSignSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn specs(&self) -> &[NegativeSignSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// An empty collection disables negative sign detection.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn validate(&self, ctx: &ErrorContext) -> Result<(), ScanError> {
        for (index, spec) in self.specs.iter().enumerate() {
            spec.validate(&ctx.child(format!("negative_signs[{index}]")), index)?;
        }
        Ok(())
    }

    /// Starts a fresh search over this collection for one scan.
    pub fn search(&self) -> NegativeSignSearch<'_> {
        NegativeSignSearch {
            collection: self,
            opened: vec![None; self.specs.len()],
        }
    }
}

impl FromIterator<NegativeSignSpec> for NegativeSignCollection {
    fn from_iter<I: IntoIterator<Item = NegativeSignSpec>>(iter: I) -> Self {
        Self {
            specs: iter.into_iter().collect(),
        }
    }
}

/// A sign symbol found during a scan.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeSignMatch {
    /// Index of the matching spec inside its collection.
    pub spec_index: usize,
    /// Character span of the matched symbol.
    pub span: Range<usize>,
    pub position: SignPosition,
    /// `false` for the opening half of an enclosing pair, which does not make
    /// the number negative on its own.
    pub confirmed: bool,
}

/// Per-scan state of a negative sign search.
#[derive(Debug)]
pub struct NegativeSignSearch<'a> {
    collection: &'a NegativeSignCollection,
    // Start index of the opening half, per enclosing spec.
    opened: Vec<Option<usize>>,
}

impl NegativeSignSearch<'_> {
    /// Tries every spec at `index`, in priority order. Matches never extend
    /// past `end`.
    pub fn search(
        &mut self,
        target: &RuneBuffer,
        index: usize,
        end: usize,
        found_first_digit: bool,
    ) -> Option<NegativeSignMatch> {
        for (spec_index, spec) in self.collection.specs.iter().enumerate() {
            let hit = |symbol: &RuneBuffer| {
                target
                    .matches_at(symbol.as_slice(), index, end)
                    .then(|| index..index + symbol.len())
            };
            let found = match spec {
                NegativeSignSpec::Leading(symbol) if !found_first_digit => {
                    hit(symbol).map(|span| (span, true))
                }
                NegativeSignSpec::Trailing(symbol) if found_first_digit => {
                    hit(symbol).map(|span| (span, true))
                }
                NegativeSignSpec::LeadingAndTrailing { leading, trailing } => {
                    match (found_first_digit, self.opened[spec_index]) {
                        (false, None) => hit(leading).map(|span| {
                            self.opened[spec_index] = Some(span.start);
                            (span, false)
                        }),
                        (true, Some(_)) => hit(trailing).map(|span| (span, true)),
                        _ => None,
                    }
                }
                _ => None,
            };
            if let Some((span, confirmed)) = found {
                return Some(NegativeSignMatch {
                    spec_index,
                    span,
                    position: spec.position(),
                    confirmed,
                });
            }
        }
        None
    }

    /// Start of the opening half seen for any enclosing spec.
    pub fn opening_index(&self) -> Option<usize> {
        self.opened.iter().flatten().copied().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_only_before_digits() {
        let col = NegativeSignCollection::french();
        let target = RuneBuffer::from("-1-");
        let mut search = col.search();
        let m = search.search(&target, 0, 3, false).unwrap();
        assert_eq!(m.span, 0..1);
        assert!(m.confirmed);
        assert_eq!(m.position, SignPosition::Before);
        assert!(search.search(&target, 2, 3, true).is_none());
    }

    #[test]
    fn trailing_only_after_digits() {
        let col = NegativeSignCollection::german();
        let target = RuneBuffer::from("-1-");
        let mut search = col.search();
        assert!(search.search(&target, 0, 3, false).is_none());
        let m = search.search(&target, 2, 3, true).unwrap();
        assert_eq!(m.position, SignPosition::After);
        assert_eq!(m.span, 2..3);
    }

    #[test]
    fn enclosing_pair_needs_opening_half() {
        let col = NegativeSignCollection::united_states();
        let target = RuneBuffer::from("(1)");
        let mut search = col.search();

        let open = search.search(&target, 0, 3, false).unwrap();
        assert_eq!(open.spec_index, 1);
        assert!(!open.confirmed);
        assert_eq!(search.opening_index(), Some(0));

        let close = search.search(&target, 2, 3, true).unwrap();
        assert!(close.confirmed);
        assert_eq!(close.position, SignPosition::BeforeAndAfter);

        let mut fresh = col.search();
        assert!(fresh.search(&target, 2, 3, true).is_none());
    }

    #[test]
    fn validation_flags_empty_and_digit_symbols() {
        let ctx = ErrorContext::new("test");
        let col: NegativeSignCollection = [
            NegativeSignSpec::Leading("-".into()),
            NegativeSignSpec::Trailing(RuneBuffer::new()),
        ]
        .into_iter()
        .collect();
        let err = col.validate(&ctx).unwrap_err();
        assert_eq!(
            err.kind(),
            &ScanErrorKind::InvalidNegativeSign {
                index: 1,
                reason: "trailing symbol is empty"
            }
        );

        let err = NegativeSignSpec::leading("-1").unwrap_err();
        assert!(matches!(
            err.kind(),
            ScanErrorKind::InvalidNegativeSign { .. }
        ));
        assert!(NegativeSignCollection::new().validate(&ctx).is_ok());
    }
}
