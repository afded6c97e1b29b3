//! # escpos-encoder
//!
//! ESC/POS command encoder for thermal receipt printers - byte encoding only.
//!
//! ## Scope
//!
//! This crate handles HOW a print directive becomes bytes:
//! - Static ESC/POS command table
//! - Fluent command encoder with per-operation validation
//! - Barcode and QR code encoding with length prefixing
//!
//! Delivery and content preparation stay outside:
//! - Transports (serial/USB/network) consume the flushed bytes
//! - Text must arrive already in the printer's codepage
//! - Job orchestration sequences encoder instances
//!
//! ## Example
//!
//! ```ignore
//! use escpos_encoder::{Alignment, EscPosEncoder};
//!
//! let mut encoder = EscPosEncoder::new();
//! encoder.init();
//! encoder.align(Alignment::Center);
//! encoder.bold_on();
//! encoder.text("RECEIPT\n");
//! encoder.bold_off();
//! encoder.size(2, 2);
//! encoder.text("TOTAL 9.50\n");
//! let data = encoder.cut(false, 3);
//!
//! // Hand `data` to a transport for delivery
//! ```

pub mod commands;

mod buffer;
mod error;
mod escpos;

// Re-exports
pub use buffer::MutableBuffer;
pub use commands::{
    Alignment, BarcodeFont, BarcodeTextPosition, Control, DrawerPin, Font, HardwareCommand,
    Symbology,
};
pub use error::{EncodeError, EncodeResult};
pub use escpos::{BarcodeOptions, EscPosEncoder, FEED_DEFAULT, QrOptions};
