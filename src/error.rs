//! Error types for the AD7691 signal-chain simulator.
//!
//! The transfer function itself is total and never fails. [`ChainError`]
//! covers the surfaces around it: device configuration, sweep ranges,
//! parsing rendered ADC codes, and writing reports.

use thiserror::Error;

/// Result type alias using [`ChainError`].
pub type Result<T> = std::result::Result<T, ChainError>;

/// Unified error type for all signal-chain operations.
#[derive(Error, Debug)]
pub enum ChainError {
    // ============ Configuration Errors ============
    /// A device parameter is out of its physical domain
    #[error("Invalid device parameter '{param}' (value: {value}): must be finite and positive")]
    InvalidConfig { param: &'static str, value: f64 },

    /// Sweep bounds or step are unusable
    #[error("Invalid sweep range: {message}")]
    InvalidSweep { message: String },

    // ============ Code Errors ============
    /// Rendered ADC code could not be parsed or is out of range
    #[error("Invalid ADC code '{input}': {message}")]
    InvalidCode { input: String, message: String },

    // ============ I/O Errors ============
    /// Error writing a report
    #[error("Failed to write output: {source}")]
    OutputError {
        #[from]
        source: std::io::Error,
    },
}

impl ChainError {
    /// Create an invalid configuration error
    pub fn invalid_config(param: &'static str, value: f64) -> Self {
        Self::InvalidConfig { param, value }
    }

    /// Create an invalid sweep error
    pub fn invalid_sweep(message: impl Into<String>) -> Self {
        Self::InvalidSweep {
            message: message.into(),
        }
    }

    /// Create an invalid code error
    pub fn invalid_code(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidCode {
            input: input.into(),
            message: message.into(),
        }
    }
}
