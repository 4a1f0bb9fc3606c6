//! Logging shims
//!
//! Every log line in the crate goes through the macros below so the backend
//! can be picked with a cargo feature:
//!
//! - `log` (default) - forwards to the `log` crate
//! - `tracing` - forwards to the `tracing` crate
//!
//! With neither backend enabled the arguments are still type-checked but
//! nothing is emitted.
//!
//! All records use the `hash_router` target, which makes them easy to filter
//! with `RUST_LOG=hash_router=trace`.
//!
//! ```ignore
//! use hash_router::{debug_log, trace_log};
//!
//! trace_log!("compiling pattern '{}'", pattern);
//! debug_log!("navigate: {} -> {}", from, to);
//! ```

/// Dispatches one record to whichever backend is enabled.
#[doc(hidden)]
#[macro_export]
macro_rules! __route_log {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!(target: "hash_router", $($arg)*);
        #[cfg(feature = "log")]
        ::log::$level!(target: "hash_router", $($arg)*);
        #[cfg(not(any(feature = "log", feature = "tracing")))]
        {
            let _ = format_args!($($arg)*);
        }
    };
}

/// Trace-level record (per-query detail such as cache hits).
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => { $crate::__route_log!(trace, $($arg)*) };
}

/// Debug-level record (navigation, router construction).
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => { $crate::__route_log!(debug, $($arg)*) };
}

/// Info-level record.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => { $crate::__route_log!(info, $($arg)*) };
}

/// Warn-level record.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => { $crate::__route_log!(warn, $($arg)*) };
}

/// Error-level record.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => { $crate::__route_log!(error, $($arg)*) };
}
