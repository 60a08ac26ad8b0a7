//! Logging shims.
//!
//! With the `tracing` feature the macros forward to `tracing` under the `carousel` target, so hosts
//! can filter engine noise with e.g. `RUST_LOG=carousel=debug`. Without it they expand to nothing
//! and their arguments are never evaluated.
//!
//! Levels used by the engine:
//! - `ctrace!`: per-event chatter (window moves, ignored input).
//! - `cdebug!`: state changes (settling, navigation, width and provider changes).
//! - `cwarn!`: host bugs that are absorbed, such as non-finite scroll offsets.

#[cfg(feature = "tracing")]
macro_rules! ctrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "carousel", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ctrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! cdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "carousel", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! cdebug {
    ($($tt:tt)*) => {};
}

// Only reached for input the host should never send.
#[cfg(feature = "tracing")]
macro_rules! cwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "carousel", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! cwarn {
    ($($tt:tt)*) => {};
}
