//! Runtime configuration for a view tree.
//!
//! Configuration can be constructed programmatically or loaded from environment variables.

use std::env;

/// Diagnostic switches for layout passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Log every layout pass with its node and duration at debug level.
    pub trace_passes: bool,
    /// Warn when a container's in-flow children overflow its main size.
    pub warn_on_overflow: bool,
}

impl TreeConfig {
    #[inline]
    #[must_use]
    pub const fn new(trace_passes: bool, warn_on_overflow: bool) -> Self {
        Self {
            trace_passes,
            warn_on_overflow,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `BOXFLOW_TRACE_PASSES`: Set to "1" to log each layout pass (default: disabled)
    /// - `BOXFLOW_WARN_OVERFLOW`: Set to "1" to warn about overflowing lines (default: disabled)
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            flag_enabled(env::var("BOXFLOW_TRACE_PASSES").ok().as_deref()),
            flag_enabled(env::var("BOXFLOW_WARN_OVERFLOW").ok().as_deref()),
        )
    }
}

/// "1" and "true" (any case) enable a flag; anything else, including unset, disables it.
fn flag_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|val| val == "1" || val.eq_ignore_ascii_case("true"))
}
