//! Character-by-character extraction of numbers from formatted text.
//!
//! [`extract_number`] walks a [`RuneBuffer`] once, classifying each character
//! as a digit, a terminator, a negative sign symbol or a decimal separator,
//! and fills a [`NumberKernel`] with the digits it finds. Dirty inputs such as
//! `"$(1,234.56)"`, `"1.234,5-"` or `"12,345 USD"` come out as canonical
//! native number strings (`-1234.56`, `-1234.5`, `12345`).
//!
//! ```rust
//! use numscan::{NumberKernel, ExtractOptions, TerminationReason};
//!
//! let (results, kernel) = NumberKernel::parse_us(
//!     "Balance: 12,345.67 USD",
//!     ExtractOptions::default(),
//!     &[" USD"],
//! )?;
//! assert_eq!(kernel.to_string(), "12345.67");
//! assert_eq!(results.termination_reason, TerminationReason::TerminatorFound);
//! # Ok::<(), numscan::ScanError>(())
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod trace;

mod engine;
mod error;
mod kernel;
mod kinds;
mod matchers;
mod native;
mod options;
mod pure;
mod rune_buffer;


pub use engine::{
    DecimalSeparatorSearchResult, NegativeSignSearchResult, NumberParseResults,
    TerminationReason, TerminatorSearchResult, UnknownTerminationReason, extract_number,
};
pub use error::{ErrorContext, ScanError, ScanErrorKind};
pub use kernel::NumberKernel;
pub use kinds::{NumericSign, SignPosition, ValueKind};
pub use matchers::{
    DecimalSeparator, NegativeSignCollection, NegativeSignMatch, NegativeSignSearch,
    NegativeSignSpec, TerminatorMatch, TerminatorSet,
};
pub use native::{
    NumberStrStats, dirty_to_native_number_str, is_valid_native_number_str,
    native_number_stats, normalize_native_number_str, rationalize_native_number_str,
    validate_native_number_str,
};
pub use options::{ExtractOptions, SearchLength};
pub use pure::parse_pure_number_str;
pub use rune_buffer::RuneBuffer;
