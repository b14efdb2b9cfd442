use alloc::{borrow::Cow, vec::Vec};
use core::fmt;

use thiserror::Error;

use crate::kinds::NumericSign;

/// Label chain describing where an error was raised.
///
/// Labels are stored outermost first and rendered joined by ` -> `, e.g.
/// `invoice.total -> extract_number -> negative_signs[1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    labels: Vec<Cow<'static, str>>,
}

impl ErrorContext {
    /// Starts a chain with a single label.
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        let mut labels = Vec::with_capacity(2);
        labels.push(label.into());
        Self { labels }
    }

    /// Returns a copy of this chain with `label` appended as the innermost
    /// entry.
    #[must_use]
    pub fn child(&self, label: impl Into<Cow<'static, str>>) -> Self {
        let mut labels = self.labels.clone();
        labels.push(label.into());
        Self { labels }
    }

    /// Inserts `label` as the outermost entry.
    pub fn prepend(&mut self, label: impl Into<Cow<'static, str>>) {
        self.labels.insert(0, label.into());
    }

    /// The labels, outermost first.
    pub fn labels(&self) -> &[Cow<'static, str>] {
        &self.labels
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

/// Error returned by every fallible operation in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{context}: {kind}")]
pub struct ScanError {
    pub(crate) context: ErrorContext,
    pub(crate) kind: ScanErrorKind,
}

impl ScanError {
    pub(crate) fn new(context: &ErrorContext, kind: ScanErrorKind) -> Self {
        Self {
            context: context.clone(),
            kind,
        }
    }

    /// Adds a caller label as the outermost entry of the context chain.
    #[must_use]
    pub fn with_context(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.context.prepend(label);
        self
    }

    /// What went wrong.
    pub fn kind(&self) -> &ScanErrorKind {
        &self.kind
    }

    /// Where it went wrong.
    pub fn context(&self) -> &ErrorContext {
        &self.context
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    #[error("target buffer is empty")]
    EmptyTarget,
    #[error("invalid UTF-8 sequence at byte offset {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("invalid code point U+{value:X} at index {index}")]
    InvalidCodePoint { index: usize, value: u32 },
    #[error("starting index {index} is out of range for a target of length {len}")]
    StartIndexOutOfRange { index: usize, len: usize },
    #[error("search length must be greater than zero")]
    ZeroSearchLength,
    #[error("negative sign spec at index {index} is invalid: {reason}")]
    InvalidNegativeSign { index: usize, reason: &'static str },
    #[error("decimal separator is invalid: {reason}")]
    InvalidDecimalSeparator { reason: &'static str },
    #[error("terminator pattern at index {index} is invalid: {reason}")]
    InvalidTerminator { index: usize, reason: &'static str },
    #[error("'{0}' is not a decimal digit")]
    InvalidDigit(char),
    #[error("input contains no numeric digits")]
    NoDigits,
    #[error("input string is empty")]
    EmptyInput,
    #[error("invalid character '{ch}' at index {index}")]
    InvalidNativeChar { index: usize, ch: char },
    #[error("minus sign at index {index} must be the first character")]
    MisplacedMinusSign { index: usize },
    #[error("sign {requested} is inconsistent with the stored value (expected {actual})")]
    SignMismatch {
        requested: NumericSign,
        actual: NumericSign,
    },
}
