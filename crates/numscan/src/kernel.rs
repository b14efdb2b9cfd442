//! Digit accumulator for a single number.
//!
//! The kernel owns an integer digit run and a fractional digit run (most
//! significant digit first) plus a sign. The value kind is never stored: it
//! is derived from which runs hold digits. The sign is stored because a
//! negative marker cannot be recovered from the digits, but it is normalized
//! by [`NumberKernel::finalize`] so that all-zero values always carry
//! [`NumericSign::Zero`] and digit-less kernels carry [`NumericSign::None`].

use alloc::string::String;
use core::{cmp::Ordering, fmt};

use crate::{
    engine::{self, NumberParseResults},
    error::{ErrorContext, ScanError, ScanErrorKind},
    kinds::{NumericSign, ValueKind},
    matchers::{DecimalSeparator, NegativeSignCollection, TerminatorSet},
    native,
    options::ExtractOptions,
    pure,
    rune_buffer::RuneBuffer,
};

#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberKernel {
    integer: RuneBuffer,
    fractional: RuneBuffer,
    sign: NumericSign,
}

impl NumberKernel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a kernel from a native number string (`-`, digits, `.`).
    pub fn from_native_str(native_str: &str) -> Result<Self, ScanError> {
        let ctx = ErrorContext::new("NumberKernel::from_native_str");
        native::validate_native_number_str(native_str)
            .map_err(|e| e.with_context("NumberKernel::from_native_str"))?;

        let mut kernel = Self::new();
        let mut negative = false;
        let mut in_fraction = false;
        for ch in native_str.chars() {
            match ch {
                '-' => negative = true,
                '.' => in_fraction = true,
                digit if in_fraction => kernel.push_fractional(digit, &ctx)?,
                digit => kernel.push_integer(digit, &ctx)?,
            }
        }
        if kernel.digit_count() == 0 {
            return Err(ScanError::new(&ctx, ScanErrorKind::NoDigits));
        }
        kernel.rationalize();
        kernel.finalize(negative);
        Ok(kernel)
    }

    pub fn from_i64(value: i64) -> Self {
        let mut kernel = Self::from_u64(value.unsigned_abs());
        kernel.finalize(value < 0);
        kernel
    }

    pub fn from_u64(value: u64) -> Self {
        let mut digits = [0u8; 20];
        let mut n = value;
        let mut at = digits.len();
        loop {
            at -= 1;
            digits[at] = b'0' + u8::try_from(n % 10).unwrap_or(0);
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let mut kernel = Self {
            integer: digits[at..].iter().map(|&b| char::from(b)).collect(),
            ..Self::default()
        };
        kernel.finalize(false);
        kernel
    }

    pub fn add_integer_digit(&mut self, digit: char) -> Result<(), ScanError> {
        self.push_integer(digit, &ErrorContext::new("NumberKernel::add_integer_digit"))
    }

    pub fn add_fractional_digit(&mut self, digit: char) -> Result<(), ScanError> {
        self.push_fractional(digit, &ErrorContext::new("NumberKernel::add_fractional_digit"))
    }

    pub(crate) fn push_integer(&mut self, digit: char, ctx: &ErrorContext) -> Result<(), ScanError> {
        check_digit(digit, ctx)?;
        self.integer.push(digit);
        Ok(())
    }

    pub(crate) fn push_fractional(
        &mut self,
        digit: char,
        ctx: &ErrorContext,
    ) -> Result<(), ScanError> {
        check_digit(digit, ctx)?;
        self.fractional.push(digit);
        Ok(())
    }

    pub fn integer_digits(&self) -> &RuneBuffer {
        &self.integer
    }

    pub fn fractional_digits(&self) -> &RuneBuffer {
        &self.fractional
    }

    pub fn integer_string(&self) -> String {
        self.integer.clone().into()
    }

    pub fn fractional_string(&self) -> String {
        self.fractional.clone().into()
    }

    pub fn integer_digit_count(&self) -> usize {
        self.integer.len()
    }

    pub fn fractional_digit_count(&self) -> usize {
        self.fractional.len()
    }

    pub fn digit_count(&self) -> usize {
        self.integer.len() + self.fractional.len()
    }

    /// Whether any stored digit is `'1'..='9'`. Pure query.
    pub fn is_non_zero(&self) -> bool {
        self.integer
            .as_slice()
            .iter()
            .chain(self.fractional.as_slice())
            .any(|&c| c != '0')
    }

    /// `true` for all-zero and digit-less kernels.
    pub fn is_zero(&self) -> bool {
        !self.is_non_zero()
    }

    pub fn value_kind(&self) -> ValueKind {
        if !self.fractional.is_empty() {
            ValueKind::FloatingPoint
        } else if !self.integer.is_empty() {
            ValueKind::Integer
        } else {
            ValueKind::None
        }
    }

    pub fn sign(&self) -> NumericSign {
        self.sign
    }

    pub fn sign_as_int(&self) -> Result<i8, ScanError> {
        self.sign.as_int().ok_or_else(|| {
            ScanError::new(
                &ErrorContext::new("NumberKernel::sign_as_int"),
                ScanErrorKind::NoDigits,
            )
        })
    }

    /// Forces the sign. Only `Negative`/`Positive` are accepted for non-zero
    /// values, only `Zero` for all-zero values and only `None` when empty.
    pub fn set_sign(&mut self, sign: NumericSign) -> Result<(), ScanError> {
        let actual = self.derived_sign(sign == NumericSign::Negative);
        let consistent = match actual {
            NumericSign::Negative | NumericSign::Positive => {
                matches!(sign, NumericSign::Negative | NumericSign::Positive)
            }
            other => other == sign,
        };
        if !consistent {
            return Err(ScanError::new(
                &ErrorContext::new("NumberKernel::set_sign"),
                ScanErrorKind::SignMismatch {
                    requested: sign,
                    actual,
                },
            ));
        }
        self.sign = sign;
        Ok(())
    }

    /// Resolves the sign from the stored digits and whether a negative marker
    /// was seen.
    pub fn finalize(&mut self, negative: bool) {
        self.sign = self.derived_sign(negative);
    }

    fn derived_sign(&self, negative: bool) -> NumericSign {
        if self.digit_count() == 0 {
            NumericSign::None
        } else if !self.is_non_zero() {
            NumericSign::Zero
        } else if negative {
            NumericSign::Negative
        } else {
            NumericSign::Positive
        }
    }

    /// Inserts a leading `'0'` integer digit when only fractional digits are
    /// present.
    pub fn rationalize(&mut self) {
        if self.integer.is_empty() && !self.fractional.is_empty() {
            self.integer.push('0');
        }
    }

    pub fn reset(&mut self) {
        self.integer.clear();
        self.fractional.clear();
        self.sign = NumericSign::None;
    }

    /// Sets the value to integer zero when no digits are stored.
    pub fn zero_if_empty(&mut self) {
        if self.digit_count() == 0 {
            self.integer.push('0');
            self.sign = NumericSign::Zero;
        }
    }

    /// Orders two kernels by numeric value.
    pub fn compare_value(&self, other: &NumberKernel) -> Ordering {
        fn rank(sign: NumericSign) -> i8 {
            match sign {
                NumericSign::Negative => -1,
                NumericSign::None | NumericSign::Zero => 0,
                NumericSign::Positive => 1,
            }
        }
        let (lhs, rhs) = (rank(self.sign), rank(other.sign));
        if lhs != rhs || lhs == 0 {
            return lhs.cmp(&rhs);
        }
        let magnitude = self.compare_magnitude(other);
        if lhs < 0 {
            magnitude.reverse()
        } else {
            magnitude
        }
    }

    fn compare_magnitude(&self, other: &NumberKernel) -> Ordering {
        let lhs_int = &self.integer.as_slice()[self.integer.count_leading_zeros()..];
        let rhs_int = &other.integer.as_slice()[other.integer.count_leading_zeros()..];
        let lhs_frac =
            &self.fractional.as_slice()[..self.fractional.len() - self.fractional.count_trailing_zeros()];
        let rhs_frac =
            &other.fractional.as_slice()[..other.fractional.len() - other.fractional.count_trailing_zeros()];
        lhs_int
            .len()
            .cmp(&rhs_int.len())
            .then_with(|| lhs_int.cmp(rhs_int))
            .then_with(|| lhs_frac.cmp(rhs_frac))
    }

    /// Scans `raw` with `.` as decimal separator and `-` / `(…)` negatives.
    pub fn parse_us(
        raw: &str,
        options: ExtractOptions,
        terminators: &[&str],
    ) -> Result<(NumberParseResults, NumberKernel), ScanError> {
        Self::parse_locale(
            raw,
            options,
            terminators,
            &NegativeSignCollection::united_states(),
            &DecimalSeparator::us(),
            "NumberKernel::parse_us",
        )
    }

    /// Scans `raw` with `,` as decimal separator and a trailing `-`.
    pub fn parse_german(
        raw: &str,
        options: ExtractOptions,
        terminators: &[&str],
    ) -> Result<(NumberParseResults, NumberKernel), ScanError> {
        Self::parse_locale(
            raw,
            options,
            terminators,
            &NegativeSignCollection::german(),
            &DecimalSeparator::european(),
            "NumberKernel::parse_german",
        )
    }

    /// Scans `raw` with `,` as decimal separator and a leading `-`.
    pub fn parse_french(
        raw: &str,
        options: ExtractOptions,
        terminators: &[&str],
    ) -> Result<(NumberParseResults, NumberKernel), ScanError> {
        Self::parse_locale(
            raw,
            options,
            terminators,
            &NegativeSignCollection::french(),
            &DecimalSeparator::france(),
            "NumberKernel::parse_french",
        )
    }

    fn parse_locale(
        raw: &str,
        options: ExtractOptions,
        terminators: &[&str],
        negative_signs: &NegativeSignCollection,
        decimal_separator: &DecimalSeparator,
        label: &'static str,
    ) -> Result<(NumberParseResults, NumberKernel), ScanError> {
        let terminators = TerminatorSet::from_strs(terminators).map_err(|e| e.with_context(label))?;
        engine::extract_number(
            &RuneBuffer::from(raw),
            options,
            negative_signs,
            decimal_separator,
            &terminators,
        )
        .map_err(|e| e.with_context(label))
    }

    /// Parses a string holding exactly one number; see
    /// [`parse_pure_number_str`](crate::parse_pure_number_str).
    pub fn parse_pure(
        pure_number: &str,
        decimal_separator: &DecimalSeparator,
        leading_minus: bool,
    ) -> Result<NumberKernel, ScanError> {
        pure::parse_pure_number_str(&RuneBuffer::from(pure_number), decimal_separator, leading_minus)
    }
}

fn check_digit(digit: char, ctx: &ErrorContext) -> Result<(), ScanError> {
    if digit.is_ascii_digit() {
        Ok(())
    } else {
        Err(ScanError::new(ctx, ScanErrorKind::InvalidDigit(digit)))
    }
}

/// Renders the native number string.
impl fmt::Display for NumberKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == NumericSign::Negative {
            f.write_str("-")?;
        }
        if self.integer.is_empty() {
            f.write_str("0")?;
        } else {
            fmt::Display::fmt(&self.integer, f)?;
        }
        if !self.fractional.is_empty() {
            f.write_str(".")?;
            fmt::Display::fmt(&self.fractional, f)?;
        }
        Ok(())
    }
}
