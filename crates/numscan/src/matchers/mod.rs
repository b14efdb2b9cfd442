//! Literal sub-searches consulted by the scanning loop: negative sign
//! symbols, the decimal separator and parsing terminators.

mod decimal;
mod negative;
mod terminator;

pub use decimal::DecimalSeparator;
pub use negative::{NegativeSignCollection, NegativeSignMatch, NegativeSignSearch, NegativeSignSpec};
pub use terminator::{TerminatorMatch, TerminatorSet};
