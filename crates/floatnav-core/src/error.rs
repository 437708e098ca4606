#![forbid(unsafe_code)]

//! Construction-time error model.
//!
//! Per-tick conditions (an unmeasurable region) are not errors; they are
//! recovered locally inside the tick. Only construction can fail.

use thiserror::Error;

/// Standard result type for monitor construction.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Errors rejected at monitor construction.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The configured middle offset is negative or non-finite.
    #[error("invalid middle offset: {value} (must be finite and non-negative)")]
    InvalidMiddleOffset { value: f64 },

    /// The host has no viewport to observe (headless environment).
    #[error("no viewport available: the viewport source is not attached")]
    ViewportUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_descriptive() {
        let err = MonitorError::InvalidMiddleOffset { value: -4.0 };
        assert!(format!("{err}").contains("-4"));

        let err = MonitorError::ViewportUnavailable;
        assert!(format!("{err}").contains("not attached"));
    }
}
