//! Structural self-checks for long-lived engine state.
//!
//! The dispatch table is the only state that outlives a call; it runs
//! [`DebugInvariants::debug_assert_invariants`] on itself right after it is
//! built, which panics on a broken table whenever [`checks_enabled`] holds.

use crate::index_error::IndexError;

/// Types that can verify their own structural invariants.
pub trait DebugInvariants {
    /// Panic on a broken invariant when checking is compiled in; no-op otherwise.
    fn debug_assert_invariants(&self);
    /// Report the first broken invariant.
    fn validate_invariants(&self) -> Result<(), IndexError>;
}

/// True in debug builds and with the `check-invariants` or
/// `strict-invariants` features.
pub const fn checks_enabled() -> bool {
    cfg!(any(
        debug_assertions,
        feature = "strict-invariants",
        feature = "check-invariants"
    ))
}
