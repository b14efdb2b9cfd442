use core::ops::Range;

use crate::{
    error::{ErrorContext, ScanError, ScanErrorKind},
    rune_buffer::RuneBuffer,
};

/// Symbol separating integer and fractional digits.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DecimalSeparator {
    /// No decimal separator detection; every digit is an integer digit.
    #[default]
    Disabled,
    Symbol(RuneBuffer),
}

impl DecimalSeparator {
    /// Separator from `symbol`; an empty string yields [`Disabled`].
    ///
    /// [`Disabled`]: DecimalSeparator::Disabled
    pub fn new(symbol: &str) -> Result<Self, ScanError> {
        if symbol.is_empty() {
            return Ok(Self::Disabled);
        }
        let sep = Self::Symbol(symbol.into());
        sep.validate(&ErrorContext::new("DecimalSeparator::new"))?;
        Ok(sep)
    }

    /// `.`
    pub fn us() -> Self {
        Self::Symbol(".".into())
    }

    /// `,`
    pub fn european() -> Self {
        Self::Symbol(",".into())
    }

    /// `,`
    pub fn france() -> Self {
        Self::Symbol(",".into())
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    pub fn symbol(&self) -> Option<&RuneBuffer> {
        match self {
            Self::Disabled => None,
            Self::Symbol(symbol) => Some(symbol),
        }
    }

    pub fn validate(&self, ctx: &ErrorContext) -> Result<(), ScanError> {
        let reason = match self {
            Self::Disabled => return Ok(()),
            Self::Symbol(symbol) if symbol.is_empty() => "symbol is empty",
            Self::Symbol(symbol) if symbol.contains_ascii_digit() => {
                "symbol may not contain digits"
            }
            Self::Symbol(_) => return Ok(()),
        };
        Err(ScanError::new(
            ctx,
            ScanErrorKind::InvalidDecimalSeparator { reason },
        ))
    }

    /// Span of the separator if it occurs at `index` and ends by `end`.
    pub fn search(&self, target: &RuneBuffer, index: usize, end: usize) -> Option<Range<usize>> {
        let symbol = self.symbol()?;
        target
            .matches_at(symbol.as_slice(), index, end)
            .then(|| index..index + symbol.len())
    }
}
