//! Logging shims
//!
//! Forward to `defmt` when the `defmt` feature is enabled and expand to
//! nothing otherwise, so call sites do not need their own `cfg` guards.

#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        #[allow(unused)]
        let _ = ($( & $x ),*);
    }};
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        #[allow(unused)]
        let _ = ($( & $x ),*);
    }};
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        #[allow(unused)]
        let _ = ($( & $x ),*);
    }};
}

/// Caller contract check
///
/// Panics in debug builds. In release builds the violation is logged and
/// the macro evaluates to `false` so the caller can skip the operation.
macro_rules! precondition {
    ($cond:expr, $s:literal $(, $x:expr)* $(,)?) => {{
        let held: bool = $cond;
        debug_assert!(held, $s $(, $x)*);
        if !held {
            warn!($s $(, $x)*);
        }
        held
    }};
}
