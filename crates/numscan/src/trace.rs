//! Scan logging, compiled out unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
macro_rules! scan_trace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! scan_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! scan_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! scan_debug {
    ($($arg:tt)*) => {};
}
