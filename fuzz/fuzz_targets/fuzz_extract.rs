#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use numscan::{
    DecimalSeparator, ExtractOptions, NegativeSignCollection, RuneBuffer, SearchLength,
    TerminatorSet, extract_number, normalize_native_number_str,
};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};

const HEADER: usize = 4; // scan configuration bytes

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static PREFIXES: &[&str] = &["", "$", "-", "(", "($", "USD ", "€ ", "Total: ", " "];
static SUFFIXES: &[&str] = &["", ")", "-", " USD", " EUR", "%", " due", ";", ","];
static GROUPING: &[char] = &[',', '.', ' ', '\''];

#[derive(Debug, Arbitrary)]
enum Preset {
    Empty,
    UnitedStates,
    German,
    French,
}

#[derive(Debug, Arbitrary)]
enum Decimal {
    Disabled,
    Us,
    European,
}

#[derive(Debug, Arbitrary)]
struct ScanConfig {
    negatives: Preset,
    decimal: Decimal,
    start: u8,
    limit: u8,
    request_remainder: bool,
    terminators: bool,
}

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn push_digits(rng: &mut SmallRng, out: &mut String, min: usize, max: usize) {
    for _ in 0..rng.random_range(min..=max) {
        out.push(char::from(b'0' + rng.random_range(0..10u8)));
    }
}

/// Prefix, grouped integer digits, optional fraction, suffix.
fn dirty_number(rng: &mut SmallRng) -> String {
    let mut out = String::new();
    out.push_str(PREFIXES[rng.random_range(0..PREFIXES.len())]);
    let grouping = GROUPING[rng.random_range(0..GROUPING.len())];
    for group in 0..rng.random_range(1..=4) {
        if group > 0 {
            out.push(grouping);
        }
        push_digits(rng, &mut out, 1, 3);
    }
    if rng.random_bool(0.5) {
        out.push(if grouping == ',' { '.' } else { ',' });
        push_digits(rng, &mut out, 0, 4);
    }
    out.push_str(SUFFIXES[rng.random_range(0..SUFFIXES.len())]);
    out
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if max_size > HEADER && (size < HEADER || seed.is_multiple_of(4)) {
        with_rng(|rng| {
            rng.fill(&mut data[..HEADER]);
            let mut written = HEADER;
            for _ in 0..rng.random_range(1..=3) {
                let text = dirty_number(rng);
                let len = text.len().min(max_size - written);
                data[written..written + len].copy_from_slice(&text.as_bytes()[..len]);
                written += len;
            }
            written
        })
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn extract(data: &[u8]) {
    if data.len() <= HEADER {
        return;
    }
    let Ok(config) = ScanConfig::arbitrary(&mut Unstructured::new(&data[..HEADER])) else {
        return;
    };
    let body = &data[HEADER..];
    let target = RuneBuffer::from_utf8(body)
        .unwrap_or_else(|_| RuneBuffer::from(String::from_utf8_lossy(body).as_ref()));
    if target.is_empty() {
        return;
    }

    let options = ExtractOptions {
        start_index: usize::from(config.start) % target.len(),
        search_length: match config.limit {
            0 => SearchLength::Unbounded,
            n => SearchLength::Limited(usize::from(n)),
        },
        request_remainder: config.request_remainder,
    };
    let negatives = match config.negatives {
        Preset::Empty => NegativeSignCollection::new(),
        Preset::UnitedStates => NegativeSignCollection::united_states(),
        Preset::German => NegativeSignCollection::german(),
        Preset::French => NegativeSignCollection::french(),
    };
    let decimal = match config.decimal {
        Decimal::Disabled => DecimalSeparator::Disabled,
        Decimal::Us => DecimalSeparator::us(),
        Decimal::European => DecimalSeparator::european(),
    };
    let terminators = if config.terminators {
        TerminatorSet::from_strs(&[";", " USD"]).unwrap()
    } else {
        TerminatorSet::new()
    };

    // Result invariants are asserted inside the crate under `fuzzing`.
    let (results, kernel) = extract_number(&target, options, &negatives, &decimal, &terminators)
        .expect("valid configuration must scan");

    if results.found_digits {
        let normalized = normalize_native_number_str(&kernel.to_string())
            .expect("rendered kernel must be a native number string");
        assert_eq!(normalize_native_number_str(&normalized).unwrap(), normalized);
    }
}

fuzz_target!(|data: &[u8]| extract(data));
