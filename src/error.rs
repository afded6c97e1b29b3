//! Error types for the encoder

use thiserror::Error;

/// Encoder error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A symbolic command name does not exist in the command table
    #[error("unknown {kind} name: {name:?}")]
    UnknownName { kind: &'static str, name: String },

    /// Barcode symbology was not supplied
    #[error("barcode symbology is required")]
    BarcodeTypeRequired,

    /// Barcode code length does not match what the symbology requires
    #[error("{symbology} barcode requires code length {expected}, got {actual}")]
    BarcodeLength {
        symbology: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A numeric argument does not fit the field the protocol gives it
    #[error("{what} out of range: {value} (max {max})")]
    ValueOutOfRange {
        what: &'static str,
        value: usize,
        max: usize,
    },
}

/// Result type for encoder operations
pub type EncodeResult<T> = Result<T, EncodeError>;
