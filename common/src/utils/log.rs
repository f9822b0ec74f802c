//! User-facing log macros.
//!
//! Thin wrappers over [`tracing`] so every crate reports through the same
//! targets and the CLI formatter can badge them uniformly.

/// Reports a progress message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Reports a successfully completed step.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "caja::success", $($arg)*)
    };
}

/// Reports a recoverable problem.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}
