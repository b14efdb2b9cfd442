//! Helpers for native number strings: ASCII digits, an optional leading `-`
//! and `.` as decimal separator, with no grouping.

use alloc::string::{String, ToString};

use crate::{
    engine::extract_number,
    error::{ErrorContext, ScanError, ScanErrorKind},
    kernel::NumberKernel,
    kinds::{NumericSign, ValueKind},
    matchers::{DecimalSeparator, NegativeSignCollection, NegativeSignSpec, TerminatorSet},
    options::ExtractOptions,
    rune_buffer::RuneBuffer,
};

/// Checks the native character set.
///
/// Every character must be a digit or `.`, except for a `-` at index 0. The
/// number of `.` characters is not limited; the first one separates the
/// integer and fractional digits when the string is parsed.
///
/// # Errors
///
/// Fails on an empty string, on a `-` past index 0 and on any other
/// character, reporting its character index.
pub fn validate_native_number_str(native: &str) -> Result<(), ScanError> {
    let ctx = ErrorContext::new("validate_native_number_str");
    if native.is_empty() {
        return Err(ScanError::new(&ctx, ScanErrorKind::EmptyInput));
    }
    for (index, ch) in native.chars().enumerate() {
        match ch {
            '0'..='9' | '.' => {}
            '-' if index == 0 => {}
            '-' => return Err(ScanError::new(&ctx, ScanErrorKind::MisplacedMinusSign { index })),
            ch => return Err(ScanError::new(&ctx, ScanErrorKind::InvalidNativeChar { index, ch })),
        }
    }
    Ok(())
}

pub fn is_valid_native_number_str(native: &str) -> bool {
    validate_native_number_str(native).is_ok()
}

/// Digit counts and classification of a native number string.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberStrStats {
    pub integer_digits: usize,
    /// Integer digits without leading zeros.
    pub significant_integer_digits: usize,
    pub fractional_digits: usize,
    /// Fractional digits without trailing zeros.
    pub significant_fractional_digits: usize,
    pub value_kind: ValueKind,
    pub sign: NumericSign,
    pub is_zero: bool,
}

impl NumberStrStats {
    fn of(kernel: &NumberKernel) -> Self {
        let integer = kernel.integer_digits();
        let fraction = kernel.fractional_digits();
        Self {
            integer_digits: integer.len(),
            significant_integer_digits: integer.len() - integer.count_leading_zeros(),
            fractional_digits: fraction.len(),
            significant_fractional_digits: fraction.len() - fraction.count_trailing_zeros(),
            value_kind: kernel.value_kind(),
            sign: kernel.sign(),
            is_zero: kernel.is_zero(),
        }
    }
}

/// Statistics for `native` as written, zero padding included.
///
/// # Errors
///
/// Fails when `native` is not a valid native number string or holds no digit.
pub fn native_number_stats(native: &str) -> Result<NumberStrStats, ScanError> {
    let kernel =
        NumberKernel::from_native_str(native).map_err(|e| e.with_context("native_number_stats"))?;
    Ok(NumberStrStats::of(&kernel))
}

/// Strips integer leading zeros (keeping one digit) and fractional trailing
/// zeros, dropping the `.` when no fractional digit is left. Zero values lose
/// their `-`.
///
/// Returns the cleaned string and the statistics of the cleaned value.
///
/// # Errors
///
/// Fails when `native` is not a valid native number string or holds no digit.
pub fn rationalize_native_number_str(native: &str) -> Result<(String, NumberStrStats), ScanError> {
    let mut kernel = NumberKernel::from_native_str(native)
        .map_err(|e| e.with_context("rationalize_native_number_str"))?;
    let negative = kernel.sign() == NumericSign::Negative;

    let mut integer = kernel.integer_digits().clone();
    let keep = integer.len().saturating_sub(1);
    integer.drain_edge(integer.count_leading_zeros().min(keep), false);
    let mut fraction = kernel.fractional_digits().clone();
    fraction.drain_edge(fraction.count_trailing_zeros(), true);

    kernel.reset();
    let ctx = ErrorContext::new("rationalize_native_number_str");
    for &digit in integer.as_slice() {
        kernel.push_integer(digit, &ctx)?;
    }
    for &digit in fraction.as_slice() {
        kernel.push_fractional(digit, &ctx)?;
    }
    kernel.finalize(negative);
    Ok((kernel.to_string(), NumberStrStats::of(&kernel)))
}

/// Validates and rationalizes `native`, returning only the cleaned string.
///
/// # Errors
///
/// See [`rationalize_native_number_str`].
pub fn normalize_native_number_str(native: &str) -> Result<String, ScanError> {
    rationalize_native_number_str(native)
        .map(|(cleaned, _)| cleaned)
        .map_err(|e| e.with_context("normalize_native_number_str"))
}

/// Converts a dirty number string such as `"$(1,234.50)"` into a native one.
///
/// Negative values are recognized by a leading `-`, a trailing `-` or
/// enclosing parentheses. Digits are kept as found, so zero padding survives.
///
/// # Errors
///
/// Fails on an empty input, on a decimal separator that is malformed or
/// contains `-`, `(` or `)`, and when no digit is found.
pub fn dirty_to_native_number_str(
    dirty: &str,
    decimal_separator: &DecimalSeparator,
) -> Result<String, ScanError> {
    let ctx = ErrorContext::new("dirty_to_native_number_str");
    if dirty.is_empty() {
        return Err(ScanError::new(&ctx, ScanErrorKind::EmptyInput));
    }
    if decimal_separator
        .symbol()
        .is_some_and(|symbol| symbol.as_slice().iter().any(|c| matches!(c, '-' | '(' | ')')))
    {
        return Err(ScanError::new(
            &ctx,
            ScanErrorKind::InvalidDecimalSeparator {
                reason: "symbol may not contain '-', '(' or ')'",
            },
        ));
    }

    let negatives: NegativeSignCollection = [
        NegativeSignSpec::Leading("-".into()),
        NegativeSignSpec::Trailing("-".into()),
        NegativeSignSpec::LeadingAndTrailing {
            leading: "(".into(),
            trailing: ")".into(),
        },
    ]
    .into_iter()
    .collect();

    let (results, kernel) = extract_number(
        &RuneBuffer::from(dirty),
        ExtractOptions::default(),
        &negatives,
        decimal_separator,
        &TerminatorSet::new(),
    )
    .map_err(|e| e.with_context("dirty_to_native_number_str"))?;

    if !results.found_digits {
        return Err(ScanError::new(&ctx, ScanErrorKind::NoDigits));
    }
    Ok(kernel.to_string())
}
