use core::fmt;

/// Sign of a parsed or accumulated number.
///
/// `Zero` is reserved for values whose digits were found but are all `'0'`;
/// `None` means no digits were found at all.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NumericSign {
    #[default]
    None,
    Negative,
    Zero,
    Positive,
}

impl NumericSign {
    /// `-1`, `0` or `1`; `None` has no integer form.
    pub fn as_int(self) -> Option<i8> {
        match self {
            NumericSign::None => None,
            NumericSign::Negative => Some(-1),
            NumericSign::Zero => Some(0),
            NumericSign::Positive => Some(1),
        }
    }
}

impl fmt::Display for NumericSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NumericSign::None => "None",
            NumericSign::Negative => "Negative",
            NumericSign::Zero => "Zero",
            NumericSign::Positive => "Positive",
        })
    }
}

/// Whether a number carries fractional digits.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValueKind {
    #[default]
    None,
    Integer,
    FloatingPoint,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::None => "None",
            ValueKind::Integer => "Integer",
            ValueKind::FloatingPoint => "FloatingPoint",
        })
    }
}

/// Where a negative sign symbol sits relative to the digits.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignPosition {
    /// Before the first digit, e.g. `-123`.
    Before,
    /// After the last digit, e.g. `123-`.
    After,
    /// Enclosing the digits, e.g. `(123)`.
    BeforeAndAfter,
}

impl fmt::Display for SignPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignPosition::Before => "Before",
            SignPosition::After => "After",
            SignPosition::BeforeAndAfter => "BeforeAndAfter",
        })
    }
}
