//! Invariant checking for built mesh records.
//!
//! Types implement [`DebugInvariants`] to expose a fallible
//! `validate_invariants` and a panicking debug-only counterpart. The
//! [`debug_invariants!`](crate::debug_invariants) macro is compiled in for
//! debug builds, or for release builds with the `strict-invariants` /
//! `check-invariants` features.

use crate::mesh_error::MeshError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), MeshError>;
}

/// Run a fallible check and panic with `ctx` on error when invariant
/// checking is enabled; expands to nothing otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
