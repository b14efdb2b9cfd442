#![expect(clippy::struct_excessive_bools)]

use core::{fmt, ops::Range, str::FromStr};

use thiserror::Error;

use crate::{
    kinds::{NumericSign, SignPosition, ValueKind},
    options::SearchLength,
    rune_buffer::RuneBuffer,
};

/// Why a scan stopped.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// Every character up to the end of the target was examined.
    #[default]
    EndOfTarget,
    /// The configured search length ran out before the end of the target.
    SearchLengthLimit,
    /// A terminator pattern matched after at least one digit.
    TerminatorFound,
    /// A trailing or enclosing negative sign closed the number.
    ///
    /// Distinct from [`ProcessError`](Self::ProcessError) so a sign exit is
    /// never mistaken for a failed scan.
    TrailingNegativeSign,
    /// Reserved for callers recording a failed scan; [`extract_number`]
    /// reports failures as [`ScanError`](crate::ScanError) instead.
    ///
    /// [`extract_number`]: crate::extract_number
    ProcessError,
}

impl TerminationReason {
    const ALL: [TerminationReason; 5] = [
        TerminationReason::EndOfTarget,
        TerminationReason::SearchLengthLimit,
        TerminationReason::TerminatorFound,
        TerminationReason::TrailingNegativeSign,
        TerminationReason::ProcessError,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TerminationReason::EndOfTarget => "EndOfTarget",
            TerminationReason::SearchLengthLimit => "SearchLengthLimit",
            TerminationReason::TerminatorFound => "TerminatorFound",
            TerminationReason::TrailingNegativeSign => "TrailingNegativeSign",
            TerminationReason::ProcessError => "ProcessError",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown termination reason")]
pub struct UnknownTerminationReason;

/// Case-insensitive; spaces, `_` and `-` between words are ignored, so
/// `"end of target"` and `"END_OF_TARGET"` both parse.
impl FromStr for TerminationReason {
    type Err = UnknownTerminationReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|reason| loose_eq(s, reason.as_str()))
            .ok_or(UnknownTerminationReason)
    }
}

fn loose_eq(input: &str, name: &str) -> bool {
    let mut input = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'));
    let mut name = name.chars();
    loop {
        match (input.next(), name.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(&b) => {}
            _ => return false,
        }
    }
}

/// Outcome of the negative sign sub-search.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NegativeSignSearchResult {
    pub found: bool,
    /// Index of the matching spec inside the collection.
    pub spec_index: Option<usize>,
    pub position: Option<SignPosition>,
    /// Span of the symbol that made the number negative. For enclosing signs
    /// this is the closing half.
    pub span: Option<Range<usize>>,
    /// Start of the opening half of an enclosing sign, if one was consumed.
    pub opening_index: Option<usize>,
}

/// Outcome of the decimal separator sub-search.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecimalSeparatorSearchResult {
    pub found: bool,
    pub span: Option<Range<usize>>,
}

/// Outcome of the terminator sub-search.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminatorSearchResult {
    pub found: bool,
    pub pattern_index: Option<usize>,
    pub span: Option<Range<usize>>,
}

/// Everything a scan found, and where it stopped.
///
/// The digits themselves live in the [`NumberKernel`](crate::NumberKernel)
/// returned alongside; the identified digit strings here are copies taken
/// after finalization.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberParseResults {
    pub target: RuneBuffer,
    pub start_index: usize,
    pub search_length: SearchLength,
    /// Exclusive end of the examined range.
    pub effective_end: usize,
    /// First unconsumed index, or `None` when the whole target was consumed.
    pub next_search_index: Option<usize>,
    pub last_search_index: usize,
    pub termination_reason: TerminationReason,

    pub found_digits: bool,
    pub found_non_zero: bool,
    pub found_integer_digits: bool,
    pub found_fractional_digits: bool,
    pub found_decimal_separator: bool,

    pub sign: NumericSign,
    pub value_kind: ValueKind,
    pub integer_digits: RuneBuffer,
    pub fractional_digits: RuneBuffer,
    pub remainder: RuneBuffer,

    pub negative_sign: NegativeSignSearchResult,
    pub decimal_separator: DecimalSeparatorSearchResult,
    pub terminator: TerminatorSearchResult,
}

/// Parameter listing, one `name: value` line per field.
impl fmt::Display for NumberParseResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "target: \"{}\"", self.target)?;
        writeln!(f, "start_index: {}", self.start_index)?;
        writeln!(f, "search_length: {:?}", self.search_length)?;
        writeln!(f, "effective_end: {}", self.effective_end)?;
        writeln!(f, "next_search_index: {:?}", self.next_search_index)?;
        writeln!(f, "last_search_index: {}", self.last_search_index)?;
        writeln!(f, "termination_reason: {}", self.termination_reason)?;
        writeln!(f, "found_digits: {}", self.found_digits)?;
        writeln!(f, "found_non_zero: {}", self.found_non_zero)?;
        writeln!(f, "found_integer_digits: {}", self.found_integer_digits)?;
        writeln!(f, "found_fractional_digits: {}", self.found_fractional_digits)?;
        writeln!(f, "found_decimal_separator: {}", self.found_decimal_separator)?;
        writeln!(f, "sign: {}", self.sign)?;
        writeln!(f, "value_kind: {}", self.value_kind)?;
        writeln!(f, "integer_digits: \"{}\"", self.integer_digits)?;
        writeln!(f, "fractional_digits: \"{}\"", self.fractional_digits)?;
        writeln!(f, "remainder: \"{}\"", self.remainder)?;
        writeln!(f, "negative_sign.found: {}", self.negative_sign.found)?;
        writeln!(f, "negative_sign.spec_index: {:?}", self.negative_sign.spec_index)?;
        writeln!(f, "negative_sign.position: {:?}", self.negative_sign.position)?;
        writeln!(f, "negative_sign.span: {:?}", self.negative_sign.span)?;
        writeln!(f, "negative_sign.opening_index: {:?}", self.negative_sign.opening_index)?;
        writeln!(f, "decimal_separator.found: {}", self.decimal_separator.found)?;
        writeln!(f, "decimal_separator.span: {:?}", self.decimal_separator.span)?;
        writeln!(f, "terminator.found: {}", self.terminator.found)?;
        writeln!(f, "terminator.pattern_index: {:?}", self.terminator.pattern_index)?;
        write!(f, "terminator.span: {:?}", self.terminator.span)
    }
}
