//! Single-pass extraction of one number from a character buffer.
//!
//! The scan walks `[start_index, effective_end)` once. At every position the
//! character is classified in a fixed priority order:
//!
//! 1. ASCII digit: appended to the integer run, or to the fractional run once
//!    a decimal separator was seen.
//! 2. Terminator: only after a digit was found; ends the scan without
//!    consuming the pattern.
//! 3. Negative sign: only until one was found. Leading symbols are consumed
//!    and the scan goes on; trailing and enclosing symbols end it.
//! 4. Decimal separator: only until one was found. Before any digit the
//!    separator must be directly followed by a digit, and a synthetic `'0'`
//!    integer digit is inserted.
//! 5. Anything else is skipped.
//!
//! Input configuration errors are returned as [`ScanError`]; finding no digit
//! at all is a normal outcome reported through the result flags.

mod result;
#[cfg(test)]
mod tests;

pub use result::{
    DecimalSeparatorSearchResult, NegativeSignSearchResult, NumberParseResults,
    TerminationReason, TerminatorSearchResult, UnknownTerminationReason,
};

use crate::{
    error::{ErrorContext, ScanError, ScanErrorKind},
    kernel::NumberKernel,
    kinds::SignPosition,
    matchers::{DecimalSeparator, NegativeSignCollection, NegativeSignSearch, TerminatorSet},
    options::{ExtractOptions, SearchLength},
    rune_buffer::RuneBuffer,
};

/// Scans `target` for one number.
///
/// Returns the scan metadata and the kernel holding the digits. When no digit
/// is found the kernel is empty, every `found_*` flag is `false` and the
/// remainder holds the whole scanned slice.
///
/// # Errors
///
/// Fails before scanning when the target is empty, the start index is out of
/// range, the search length is `Limited(0)` or any matcher configuration is
/// malformed.
///
/// # Examples
///
/// ```rust
/// use numscan::{
///     extract_number, DecimalSeparator, ExtractOptions, NegativeSignCollection,
///     NumericSign, RuneBuffer, TerminatorSet,
/// };
///
/// let target = RuneBuffer::from("Total: (1,234.50) due");
/// let (results, kernel) = extract_number(
///     &target,
///     ExtractOptions::default(),
///     &NegativeSignCollection::united_states(),
///     &DecimalSeparator::us(),
///     &TerminatorSet::new(),
/// )?;
/// assert!(results.found_digits);
/// assert_eq!(kernel.sign(), NumericSign::Negative);
/// assert_eq!(kernel.to_string(), "-1234.50");
/// # Ok::<(), numscan::ScanError>(())
/// ```
pub fn extract_number(
    target: &RuneBuffer,
    options: ExtractOptions,
    negative_signs: &NegativeSignCollection,
    decimal_separator: &DecimalSeparator,
    terminators: &TerminatorSet,
) -> Result<(NumberParseResults, NumberKernel), ScanError> {
    let ctx = ErrorContext::new("extract_number");
    validate(&ctx, target, options, negative_signs, decimal_separator, terminators).inspect_err(
        |_err| {
            scan_debug!(error = %_err, "rejected scan configuration");
        },
    )?;

    let end = options.effective_end(target.len());
    scan_trace!(start = options.start_index, end, "scan started");

    let mut scan = Scan {
        target,
        end,
        decimal_separator,
        terminators,
        negatives: negative_signs.search(),
        kernel: NumberKernel::new(),
        results: NumberParseResults {
            target: target.clone(),
            start_index: options.start_index,
            search_length: options.search_length,
            effective_end: end,
            ..NumberParseResults::default()
        },
        found_first_digit: false,
        negative: false,
    };
    let (next, reason) = scan.run(options.start_index, &ctx)?;
    Ok(scan.finish(next, reason, options))
}

fn validate(
    ctx: &ErrorContext,
    target: &RuneBuffer,
    options: ExtractOptions,
    negative_signs: &NegativeSignCollection,
    decimal_separator: &DecimalSeparator,
    terminators: &TerminatorSet,
) -> Result<(), ScanError> {
    if target.is_empty() {
        return Err(ScanError::new(ctx, ScanErrorKind::EmptyTarget));
    }
    if options.start_index >= target.len() {
        return Err(ScanError::new(
            ctx,
            ScanErrorKind::StartIndexOutOfRange {
                index: options.start_index,
                len: target.len(),
            },
        ));
    }
    if options.search_length == SearchLength::Limited(0) {
        return Err(ScanError::new(ctx, ScanErrorKind::ZeroSearchLength));
    }
    negative_signs.validate(ctx)?;
    decimal_separator.validate(&ctx.child("decimal_separator"))?;
    terminators.validate(ctx)
}

struct Scan<'a> {
    target: &'a RuneBuffer,
    end: usize,
    decimal_separator: &'a DecimalSeparator,
    terminators: &'a TerminatorSet,
    negatives: NegativeSignSearch<'a>,
    kernel: NumberKernel,
    results: NumberParseResults,
    found_first_digit: bool,
    negative: bool,
}

impl Scan<'_> {
    /// Runs the loop and returns the first unconsumed index together with the
    /// reason the scan stopped.
    fn run(
        &mut self,
        start: usize,
        ctx: &ErrorContext,
    ) -> Result<(usize, TerminationReason), ScanError> {
        let mut i = start;
        while i < self.end {
            let Some(ch) = self.target.get(i) else {
                break;
            };

            if ch.is_ascii_digit() {
                if self.results.decimal_separator.found {
                    self.kernel.push_fractional(ch, ctx)?;
                } else {
                    self.kernel.push_integer(ch, ctx)?;
                }
                self.found_first_digit = true;
                i += 1;
                continue;
            }

            if self.found_first_digit && !self.terminators.is_nop() {
                if let Some(found) = self.terminators.search(self.target, i, self.end) {
                    scan_trace!(index = i, pattern = found.pattern_index, "terminator matched");
                    self.results.terminator = TerminatorSearchResult {
                        found: true,
                        pattern_index: Some(found.pattern_index),
                        span: Some(found.span),
                    };
                    return Ok((i, TerminationReason::TerminatorFound));
                }
            }

            if !self.negative {
                if let Some(found) =
                    self.negatives
                        .search(self.target, i, self.end, self.found_first_digit)
                {
                    scan_trace!(index = i, confirmed = found.confirmed, "negative sign matched");
                    i = found.span.end;
                    if !found.confirmed {
                        continue;
                    }
                    self.negative = true;
                    let closes = found.position != SignPosition::Before;
                    self.results.negative_sign = NegativeSignSearchResult {
                        found: true,
                        spec_index: Some(found.spec_index),
                        position: Some(found.position),
                        span: Some(found.span),
                        opening_index: self.negatives.opening_index(),
                    };
                    if closes {
                        return Ok((i, TerminationReason::TrailingNegativeSign));
                    }
                    continue;
                }
            }

            if !self.results.decimal_separator.found {
                if let Some(span) = self.decimal_separator.search(self.target, i, self.end) {
                    let accepted = self.found_first_digit
                        || (span.end < self.end
                            && self.target.get(span.end).is_some_and(|c| c.is_ascii_digit()));
                    if accepted {
                        scan_trace!(index = i, "decimal separator matched");
                        if !self.found_first_digit {
                            self.kernel.push_integer('0', ctx)?;
                            self.found_first_digit = true;
                        }
                        i = span.end;
                        self.results.decimal_separator = DecimalSeparatorSearchResult {
                            found: true,
                            span: Some(span),
                        };
                        continue;
                    }
                }
            }

            i += 1;
        }

        let reason = if self.end < self.target.len() {
            TerminationReason::SearchLengthLimit
        } else {
            TerminationReason::EndOfTarget
        };
        Ok((self.end, reason))
    }

    fn finish(
        mut self,
        next: usize,
        reason: TerminationReason,
        options: ExtractOptions,
    ) -> (NumberParseResults, NumberKernel) {
        let len = self.target.len();
        let results = &mut self.results;
        results.termination_reason = reason;
        results.next_search_index = (next < len).then_some(next);
        results.last_search_index = next.saturating_sub(1);

        if self.kernel.digit_count() == 0 {
            self.kernel.reset();
            results.negative_sign = NegativeSignSearchResult::default();
            results.decimal_separator = DecimalSeparatorSearchResult::default();
            results.remainder = self.target.slice(options.start_index..self.end);
        } else {
            if options.request_remainder && next < len {
                results.remainder = self.target.tail(next);
            }
            self.kernel.rationalize();
            self.kernel.finalize(self.negative);

            results.found_digits = true;
            results.found_non_zero = self.kernel.is_non_zero();
            results.found_integer_digits = self.kernel.integer_digit_count() > 0;
            results.found_fractional_digits = self.kernel.fractional_digit_count() > 0;
            results.integer_digits = self.kernel.integer_digits().clone();
            results.fractional_digits = self.kernel.fractional_digits().clone();
        }
        results.found_decimal_separator = results.decimal_separator.found;
        results.sign = self.kernel.sign();
        results.value_kind = self.kernel.value_kind();

        scan_debug!(
            reason = %reason,
            next = ?results.next_search_index,
            integer_digits = self.kernel.integer_digit_count(),
            fractional_digits = self.kernel.fractional_digit_count(),
            "scan finished"
        );
        #[cfg(any(test, feature = "fuzzing"))]
        assert_invariants(&self.results, &self.kernel);
        (self.results, self.kernel)
    }
}

/// Panics when a finished scan breaks a result invariant.
#[cfg(any(test, feature = "fuzzing"))]
fn assert_invariants(results: &NumberParseResults, kernel: &NumberKernel) {
    use crate::kinds::NumericSign;

    let len = results.target.len();
    assert!(results.effective_end <= len, "effective end past target");
    if let Some(next) = results.next_search_index {
        assert!(
            next > results.start_index && next < len,
            "next search index {next} outside ({}, {len})",
            results.start_index
        );
    }
    assert!(
        kernel.fractional_digit_count() == 0 || kernel.integer_digit_count() > 0,
        "fractional digits without integer digits"
    );
    assert_eq!(results.value_kind, kernel.value_kind());
    assert_eq!(results.sign, kernel.sign());
    if !results.found_digits {
        assert_eq!(kernel.digit_count(), 0);
        assert_eq!(kernel.sign(), NumericSign::None);
    } else if !results.found_non_zero {
        assert_eq!(kernel.sign(), NumericSign::Zero);
    }
}
