use crate::{
    error::{ErrorContext, ScanError, ScanErrorKind},
    kernel::NumberKernel,
    matchers::DecimalSeparator,
    rune_buffer::RuneBuffer,
};

/// Parses a buffer known to hold exactly one number.
///
/// Only `decimal_separator` and a single `-` convention are consulted: with
/// `leading_minus` the `-` counts only before the first digit, otherwise only
/// after it. A `-` anywhere else is ignored, as is any character that is not
/// a digit or the first decimal separator.
///
/// # Errors
///
/// Fails when the buffer is empty or holds no digit.
pub fn parse_pure_number_str(
    pure_number: &RuneBuffer,
    decimal_separator: &DecimalSeparator,
    leading_minus: bool,
) -> Result<NumberKernel, ScanError> {
    let ctx = ErrorContext::new("parse_pure_number_str");
    if pure_number.is_empty() {
        return Err(ScanError::new(&ctx, ScanErrorKind::EmptyInput));
    }
    decimal_separator.validate(&ctx.child("decimal_separator"))?;

    let len = pure_number.len();
    let mut kernel = NumberKernel::new();
    let mut found_digit = false;
    let mut found_separator = false;
    let mut minus = false;

    let mut i = 0;
    while let Some(ch) = pure_number.get(i) {
        if ch == '-' {
            if leading_minus != found_digit {
                minus = true;
            }
            i += 1;
            continue;
        }
        if ch.is_ascii_digit() {
            if found_separator {
                kernel.push_fractional(ch, &ctx)?;
            } else {
                kernel.push_integer(ch, &ctx)?;
            }
            found_digit = true;
            i += 1;
            continue;
        }
        if !found_separator {
            if let Some(span) = decimal_separator.search(pure_number, i, len) {
                found_separator = true;
                i = span.end;
                continue;
            }
        }
        i += 1;
    }

    if !found_digit {
        return Err(ScanError::new(&ctx, ScanErrorKind::NoDigits));
    }
    kernel.rationalize();
    kernel.finalize(minus);
    Ok(kernel)
}
