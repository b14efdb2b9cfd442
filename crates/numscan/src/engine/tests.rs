use alloc::{string::ToString, vec::Vec};

use rstest::rstest;

use super::*;
use crate::{
    kinds::{NumericSign, ValueKind},
    matchers::NegativeSignSpec,
};

fn scan_with(
    input: &str,
    options: ExtractOptions,
    negatives: &NegativeSignCollection,
    decimal: &DecimalSeparator,
    terminators: &[&str],
) -> (NumberParseResults, NumberKernel) {
    let terminators = TerminatorSet::from_strs(terminators).unwrap();
    extract_number(
        &RuneBuffer::from(input),
        options,
        negatives,
        decimal,
        &terminators,
    )
    .unwrap()
}

fn remainder() -> ExtractOptions {
    ExtractOptions {
        request_remainder: true,
        ..ExtractOptions::default()
    }
}

#[rstest]
#[case::us_decimal("123.45", NegativeSignCollection::new(), DecimalSeparator::us(), "123", "45", NumericSign::Positive, ValueKind::FloatingPoint)]
#[case::leading_minus("-123", NegativeSignCollection::french(), DecimalSeparator::Disabled, "123", "", NumericSign::Negative, ValueKind::Integer)]
#[case::bare_fraction(".5", NegativeSignCollection::new(), DecimalSeparator::us(), "0", "5", NumericSign::Positive, ValueKind::FloatingPoint)]
#[case::all_zero("000", NegativeSignCollection::new(), DecimalSeparator::us(), "000", "", NumericSign::Zero, ValueKind::Integer)]
#[case::negative_zero("-0.00", NegativeSignCollection::french(), DecimalSeparator::us(), "0", "00", NumericSign::Zero, ValueKind::FloatingPoint)]
#[case::currency_parens("($1,234.56)", NegativeSignCollection::united_states(), DecimalSeparator::us(), "1234", "56", NumericSign::Negative, ValueKind::FloatingPoint)]
#[case::unclosed_paren("(12", NegativeSignCollection::united_states(), DecimalSeparator::us(), "12", "", NumericSign::Positive, ValueKind::Integer)]
#[case::german("1.234,5-", NegativeSignCollection::german(), DecimalSeparator::european(), "1234", "5", NumericSign::Negative, ValueKind::FloatingPoint)]
#[case::minus_after_dot("-.75", NegativeSignCollection::french(), DecimalSeparator::us(), "0", "75", NumericSign::Negative, ValueKind::FloatingPoint)]
#[case::multi_char_separator("::5", NegativeSignCollection::new(), DecimalSeparator::Symbol("::".into()), "0", "5", NumericSign::Positive, ValueKind::FloatingPoint)]
fn extracts_values(
    #[case] input: &str,
    #[case] negatives: NegativeSignCollection,
    #[case] decimal: DecimalSeparator,
    #[case] integer: &str,
    #[case] fraction: &str,
    #[case] sign: NumericSign,
    #[case] kind: ValueKind,
) {
    let (res, kernel) = scan_with(input, ExtractOptions::default(), &negatives, &decimal, &[]);
    assert!(res.found_digits);
    assert_eq!(kernel.integer_string(), integer);
    assert_eq!(kernel.fractional_string(), fraction);
    assert_eq!(kernel.sign(), sign);
    assert_eq!(kernel.value_kind(), kind);
    assert_eq!(res.integer_digits, integer);
    assert_eq!(res.fractional_digits, fraction);
    assert_eq!(res.sign, sign);
    assert_eq!(res.value_kind, kind);
    assert_eq!(res.found_fractional_digits, !fraction.is_empty());
}

#[test]
fn all_zero_digits_are_not_non_zero() {
    let (res, kernel) = scan_with(
        "000",
        ExtractOptions::default(),
        &NegativeSignCollection::new(),
        &DecimalSeparator::us(),
        &[],
    );
    assert!(!res.found_non_zero);
    assert!(kernel.is_zero());
    assert_eq!(res.termination_reason, TerminationReason::EndOfTarget);
}

#[test]
fn terminator_stops_scan_and_leaves_remainder() {
    let (res, kernel) = scan_with(
        "12,345 USD",
        remainder(),
        &NegativeSignCollection::new(),
        &DecimalSeparator::Disabled,
        &[" USD"],
    );
    assert_eq!(kernel.integer_string(), "12345");
    assert_eq!(res.termination_reason, TerminationReason::TerminatorFound);
    assert_eq!(res.remainder, " USD");
    assert_eq!(res.next_search_index, Some(6));
    assert_eq!(res.last_search_index, 5);
    assert_eq!(res.terminator.pattern_index, Some(0));
    assert_eq!(res.terminator.span, Some(6..10));
}

#[test]
fn remainder_is_only_copied_on_request() {
    let (res, _) = scan_with(
        "12,345 USD",
        ExtractOptions::default(),
        &NegativeSignCollection::new(),
        &DecimalSeparator::Disabled,
        &[" USD"],
    );
    assert!(res.remainder.is_empty());
    assert_eq!(res.next_search_index, Some(6));
}

#[test]
fn no_digits_returns_whole_slice() {
    let (res, kernel) = scan_with(
        "abc",
        ExtractOptions::default(),
        &NegativeSignCollection::united_states(),
        &DecimalSeparator::us(),
        &[],
    );
    assert!(!res.found_digits);
    assert!(!res.found_non_zero);
    assert_eq!(res.remainder, "abc");
    assert_eq!(kernel.digit_count(), 0);
    assert_eq!(kernel.sign(), NumericSign::None);
    assert_eq!(res.value_kind, ValueKind::None);
    assert_eq!(res.next_search_index, None);
}

#[test]
fn no_digits_clears_sign_flags() {
    let (res, kernel) = scan_with(
        "ab-cd",
        ExtractOptions::from_index(1),
        &NegativeSignCollection::french(),
        &DecimalSeparator::us(),
        &[],
    );
    assert!(!res.negative_sign.found);
    assert_eq!(kernel.sign(), NumericSign::None);
    assert_eq!(res.remainder, "b-cd");
}

#[test]
fn no_digits_in_window_returns_only_the_window() {
    let (res, kernel) = scan_with(
        "abcdef",
        ExtractOptions {
            start_index: 1,
            search_length: SearchLength::Limited(2),
            request_remainder: false,
        },
        &NegativeSignCollection::united_states(),
        &DecimalSeparator::us(),
        &[],
    );
    assert!(!res.found_digits);
    assert_eq!(kernel.digit_count(), 0);
    assert_eq!(res.termination_reason, TerminationReason::SearchLengthLimit);
    assert_eq!(res.remainder, "bc");
    assert_eq!(res.next_search_index, Some(3));
}

#[test]
fn unknown_characters_are_skipped() {
    let (res, kernel) = scan_with(
        "1a2b3",
        ExtractOptions::default(),
        &NegativeSignCollection::new(),
        &DecimalSeparator::us(),
        &[],
    );
    assert_eq!(kernel.integer_string(), "123");
    assert_eq!(res.termination_reason, TerminationReason::EndOfTarget);
    assert_eq!(res.next_search_index, None);
    assert_eq!(res.last_search_index, 4);
}

#[test]
fn misplaced_signs_are_skipped() {
    // Leading sign after a digit and a second decimal separator.
    let (_, kernel) = scan_with(
        "5-3.1.2",
        ExtractOptions::default(),
        &NegativeSignCollection::french(),
        &DecimalSeparator::us(),
        &[],
    );
    assert_eq!(kernel.to_string(), "53.12");
}

#[test]
fn isolated_separator_before_digits_is_ignored() {
    let (res, kernel) = scan_with(
        "Price: . 5",
        ExtractOptions::default(),
        &NegativeSignCollection::new(),
        &DecimalSeparator::us(),
        &[],
    );
    assert!(!res.found_decimal_separator);
    assert_eq!(kernel.to_string(), "5");
    assert_eq!(kernel.value_kind(), ValueKind::Integer);
}

#[test]
fn terminator_wins_over_trailing_sign() {
    let (res, kernel) = scan_with(
        "12-",
        ExtractOptions::default(),
        &NegativeSignCollection::german(),
        &DecimalSeparator::Disabled,
        &["-"],
    );
    assert_eq!(res.termination_reason, TerminationReason::TerminatorFound);
    assert_eq!(kernel.sign(), NumericSign::Positive);
    assert!(!res.negative_sign.found);
}

#[test]
fn terminators_need_a_digit_first() {
    let (res, kernel) = scan_with(
        " 42 ",
        ExtractOptions::default(),
        &NegativeSignCollection::new(),
        &DecimalSeparator::Disabled,
        &[" "],
    );
    assert_eq!(kernel.to_string(), "42");
    assert_eq!(res.termination_reason, TerminationReason::TerminatorFound);
    assert_eq!(res.next_search_index, Some(3));
}

#[test]
fn enclosing_sign_closes_the_number() {
    let (res, kernel) = scan_with(
        "(12.5) 7",
        remainder(),
        &NegativeSignCollection::united_states(),
        &DecimalSeparator::us(),
        &[],
    );
    assert_eq!(kernel.to_string(), "-12.5");
    assert_eq!(res.termination_reason, TerminationReason::TrailingNegativeSign);
    assert_eq!(
        res.negative_sign,
        NegativeSignSearchResult {
            found: true,
            spec_index: Some(1),
            position: Some(SignPosition::BeforeAndAfter),
            span: Some(5..6),
            opening_index: Some(0),
        }
    );
    assert_eq!(res.next_search_index, Some(6));
    assert_eq!(res.remainder, " 7");
}

#[test]
fn trailing_sign_at_end_consumes_target() {
    let (res, kernel) = scan_with(
        "1.234,5-",
        remainder(),
        &NegativeSignCollection::german(),
        &DecimalSeparator::european(),
        &[],
    );
    assert_eq!(kernel.sign(), NumericSign::Negative);
    assert_eq!(res.termination_reason, TerminationReason::TrailingNegativeSign);
    assert_eq!(res.next_search_index, None);
    assert_eq!(res.last_search_index, 7);
    assert!(res.remainder.is_empty());
}

#[rstest]
#[case(1, SearchLength::Limited(2), "23", TerminationReason::SearchLengthLimit, Some(3))]
#[case(0, SearchLength::Limited(10), "12345", TerminationReason::EndOfTarget, None)]
#[case(3, SearchLength::Unbounded, "45", TerminationReason::EndOfTarget, None)]
#[case(4, SearchLength::Limited(1), "5", TerminationReason::EndOfTarget, None)]
fn search_bounds(
    #[case] start_index: usize,
    #[case] search_length: SearchLength,
    #[case] digits: &str,
    #[case] reason: TerminationReason,
    #[case] next: Option<usize>,
) {
    let options = ExtractOptions {
        start_index,
        search_length,
        request_remainder: true,
    };
    let (res, kernel) = scan_with(
        "12345",
        options,
        &NegativeSignCollection::new(),
        &DecimalSeparator::Disabled,
        &[],
    );
    assert_eq!(kernel.integer_string(), digits);
    assert_eq!(res.termination_reason, reason);
    assert_eq!(res.next_search_index, next);
    assert!(res.next_search_index.is_none_or(|n| n >= start_index && n <= 5));
}

#[test]
fn separator_must_fit_inside_search_window() {
    let options = ExtractOptions {
        start_index: 0,
        search_length: SearchLength::Limited(2),
        request_remainder: false,
    };
    let (res, kernel) = scan_with(
        "1.5",
        options,
        &NegativeSignCollection::new(),
        &DecimalSeparator::us(),
        &[],
    );
    // The separator is consumed but the fractional digit lies past the end.
    assert!(res.found_decimal_separator);
    assert_eq!(kernel.to_string(), "1");
    assert_eq!(kernel.value_kind(), ValueKind::Integer);
}

#[test]
fn rejects_bad_configuration() {
    let empty = extract_number(
        &RuneBuffer::new(),
        ExtractOptions::default(),
        &NegativeSignCollection::from_iter([NegativeSignSpec::Leading(RuneBuffer::new())]),
        &DecimalSeparator::us(),
        &TerminatorSet::new(),
    )
    .unwrap_err();
    assert_eq!(empty.kind(), &ScanErrorKind::EmptyTarget);

    let target = RuneBuffer::from("123");
    let run = |options: ExtractOptions,
               negatives: &NegativeSignCollection,
               decimal: &DecimalSeparator,
               terminators: &TerminatorSet| {
        extract_number(&target, options, negatives, decimal, terminators).unwrap_err()
    };

    let err = run(
        ExtractOptions::from_index(3),
        &NegativeSignCollection::new(),
        &DecimalSeparator::us(),
        &TerminatorSet::new(),
    );
    assert_eq!(
        err.kind(),
        &ScanErrorKind::StartIndexOutOfRange { index: 3, len: 3 }
    );

    let err = run(
        ExtractOptions {
            search_length: SearchLength::Limited(0),
            ..ExtractOptions::default()
        },
        &NegativeSignCollection::new(),
        &DecimalSeparator::us(),
        &TerminatorSet::new(),
    );
    assert_eq!(err.kind(), &ScanErrorKind::ZeroSearchLength);

    let err = run(
        ExtractOptions::default(),
        &NegativeSignCollection::french().with(NegativeSignSpec::Trailing("".into())),
        &DecimalSeparator::us(),
        &TerminatorSet::new(),
    );
    assert_eq!(
        err.to_string(),
        "extract_number -> negative_signs[1]: \
         negative sign spec at index 1 is invalid: trailing symbol is empty"
    );

    let err = run(
        ExtractOptions::default(),
        &NegativeSignCollection::new(),
        &DecimalSeparator::Symbol("7".into()),
        &TerminatorSet::new(),
    );
    assert!(matches!(err.kind(), ScanErrorKind::InvalidDecimalSeparator { .. }));

    let err = run(
        ExtractOptions::default(),
        &NegativeSignCollection::new(),
        &DecimalSeparator::us(),
        &TerminatorSet::from_iter([RuneBuffer::new()]),
    );
    assert!(matches!(err.kind(), ScanErrorKind::InvalidTerminator { index: 0, .. }));
}

#[test]
fn termination_reason_parses_loosely() {
    let parsed: Vec<TerminationReason> = ["end of target", "SEARCH_LENGTH_LIMIT", "terminatorFound"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(
        parsed,
        [
            TerminationReason::EndOfTarget,
            TerminationReason::SearchLengthLimit,
            TerminationReason::TerminatorFound,
        ]
    );
    assert!("end of targets".parse::<TerminationReason>().is_err());
    assert_eq!(
        TerminationReason::TrailingNegativeSign.to_string(),
        "TrailingNegativeSign"
    );
}
