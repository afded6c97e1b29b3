//! ESC/POS command encoder
//!
//! Provides a fluent API for turning semantic print directives into a raw
//! ESC/POS byte stream.

use crate::buffer::MutableBuffer;
use crate::commands::{
    self, Alignment, BarcodeFont, BarcodeTextPosition, Control, DrawerPin, Font, HardwareCommand,
    Symbology, line_spacing, margins, paper, text_format,
};
use crate::error::{EncodeError, EncodeResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Lines fed before a cut when the caller passes zero
pub const FEED_DEFAULT: u8 = 3;

/// Barcode rendering options
///
/// Defaults match the protocol's common case: module width 3, height 100
/// dots, HRI font B printed both above and below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeOptions {
    pub width: u8,
    pub height: u8,
    pub position: BarcodeTextPosition,
    pub font: BarcodeFont,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            width: 3,
            height: 100,
            position: BarcodeTextPosition::Both,
            font: BarcodeFont::B,
        }
    }
}

/// QR code rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrOptions {
    pub version: u8,
    pub level: u8,
    pub size: u8,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            version: 3,
            level: 3,
            size: 8,
        }
    }
}

/// ESC/POS command encoder
///
/// Owns one byte buffer and appends one validated command encoding per
/// operation, in call order. The encoder tracks nothing else; formatting
/// state (current font, alignment) lives on the physical printer.
///
/// Operations return `&mut Self` for chaining; terminal operations
/// ([`hardware`](Self::hardware), [`cashdraw`](Self::cashdraw),
/// [`cut`](Self::cut)) flush and return the accumulated bytes. One encoder
/// per print job; sharing an instance across threads needs external
/// synchronization.
#[derive(Debug, Default)]
pub struct EscPosEncoder {
    buf: MutableBuffer,
}

impl EscPosEncoder {
    /// Create an encoder with an empty buffer
    pub fn new() -> Self {
        Self {
            buf: MutableBuffer::new(),
        }
    }

    // === Hardware ===

    /// Initialize the printer (ESC @)
    pub fn init(&mut self) -> &mut Self {
        self.buf.write(commands::hardware::INIT);
        self
    }

    /// Append a hardware command, then flush.
    ///
    /// Hardware commands close out the current job; the accumulated bytes
    /// are returned and the buffer is left empty.
    pub fn hardware(&mut self, hw: HardwareCommand) -> Vec<u8> {
        self.buf.write(hw.bytes());
        self.flush()
    }

    // === Text ===

    /// Append a text payload verbatim.
    ///
    /// The payload must already be in the printer's codepage; no transcoding
    /// happens here.
    pub fn text(&mut self, content: &str) -> &mut Self {
        self.buf.write_str(content);
        self
    }

    /// Append raw bytes verbatim
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.write(bytes);
        self
    }

    /// Enable bold
    pub fn bold_on(&mut self) -> &mut Self {
        self.buf.write(text_format::BOLD_ON);
        self
    }

    /// Disable bold
    pub fn bold_off(&mut self) -> &mut Self {
        self.buf.write(text_format::BOLD_OFF);
        self
    }

    /// Set text alignment
    pub fn align(&mut self, align: Alignment) -> &mut Self {
        self.buf.write(align.bytes());
        self
    }

    /// Select character font
    pub fn font(&mut self, family: Font) -> &mut Self {
        self.buf.write(family.bytes());
        self
    }

    /// Set character size multipliers.
    ///
    /// Multipliers of 2 or less reset to normal and overlay the matching
    /// doubling preset; anything larger emits the parameterized custom-size
    /// command instead.
    pub fn size(&mut self, width: u8, height: u8) -> &mut Self {
        if width <= 2 && height <= 2 {
            self.buf.write(text_format::NORMAL);
            match (width, height) {
                (2, 2) => self.buf.write(text_format::QUAD),
                (1, 2) => self.buf.write(text_format::HEIGHT_2X),
                (2, 1) => self.buf.write(text_format::WIDTH_2X),
                _ => {}
            }
        } else {
            self.buf.write(&commands::custom_size(width, height));
        }
        self
    }

    // === Margins and spacing ===

    /// Set bottom margin
    pub fn margin_bottom(&mut self, size: u8) -> &mut Self {
        self.buf.write(margins::BOTTOM);
        self.buf.write_u8(size);
        self
    }

    /// Set left margin
    pub fn margin_left(&mut self, size: u8) -> &mut Self {
        self.buf.write(margins::LEFT);
        self.buf.write_u8(size);
        self
    }

    /// Set right margin
    pub fn margin_right(&mut self, size: u8) -> &mut Self {
        self.buf.write(margins::RIGHT);
        self.buf.write_u8(size);
        self
    }

    /// Set line spacing, or restore the printer default when `None`
    pub fn line_space(&mut self, n: Option<u8>) -> &mut Self {
        match n {
            Some(n) => {
                self.buf.write(line_spacing::SET);
                self.buf.write_u8(n);
            }
            None => self.buf.write(line_spacing::DEFAULT),
        }
        self
    }

    // === Feed ===

    /// Feed `n` lines; zero feeds one
    pub fn feed(&mut self, n: u8) -> &mut Self {
        for _ in 0..n.max(1) {
            self.buf.write(commands::EOL);
        }
        self
    }

    /// Append a feed control sequence
    pub fn control(&mut self, ctrl: Control) -> &mut Self {
        self.buf.write(ctrl.bytes());
        self
    }

    // === Barcode ===

    /// Append a barcode command.
    ///
    /// Validates the whole argument set before touching the buffer, so a
    /// failure never leaves a partially-encoded command behind. EAN13 needs
    /// a 12-character code, EAN8 needs 7; codes must be ASCII and fit the
    /// protocol's single length byte.
    pub fn barcode(
        &mut self,
        code: &str,
        symbology: Option<Symbology>,
        opts: &BarcodeOptions,
    ) -> EncodeResult<&mut Self> {
        let symbology = symbology.ok_or(EncodeError::BarcodeTypeRequired)?;

        let required = match symbology {
            Symbology::Ean13 => Some(12),
            Symbology::Ean8 => Some(7),
            _ => None,
        };
        if let Some(expected) = required {
            let actual = code.chars().count();
            if actual != expected {
                return Err(EncodeError::BarcodeLength {
                    symbology: symbology.name(),
                    expected,
                    actual,
                });
            }
        }
        if !code.is_ascii() {
            return Err(EncodeError::ValueOutOfRange {
                what: "barcode code point",
                value: code.chars().find(|c| !c.is_ascii()).map(|c| c as usize).unwrap_or(0),
                max: 0x7F,
            });
        }
        if code.len() > u8::MAX as usize {
            return Err(EncodeError::ValueOutOfRange {
                what: "barcode code length",
                value: code.len(),
                max: u8::MAX as usize,
            });
        }

        self.buf.write(&commands::barcode_width(opts.width));
        self.buf.write(&commands::barcode_height(opts.height));
        self.buf.write(opts.font.bytes());
        self.buf.write(opts.position.bytes());
        self.buf.write(symbology.bytes());
        self.buf.write_u8(code.len() as u8);
        self.buf.write_str(code);
        self.buf.write_u8(0x00);

        trace!(symbology = symbology.name(), len = code.len(), "barcode encoded");
        Ok(self)
    }

    // === QR code ===

    /// Append a QR code command: prefix, version/level/size bytes, a
    /// little-endian 16-bit payload length, then the payload verbatim.
    pub fn qrcode(&mut self, code: &str, opts: &QrOptions) -> EncodeResult<&mut Self> {
        let len = u16::try_from(code.len()).map_err(|_| EncodeError::ValueOutOfRange {
            what: "qr payload length",
            value: code.len(),
            max: u16::MAX as usize,
        })?;

        self.buf.write(commands::code2d::QR);
        self.buf.write_u8(opts.version);
        self.buf.write_u8(opts.level);
        self.buf.write_u8(opts.size);
        self.buf.write_u16_le(len);
        self.buf.write_str(code);

        trace!(len, "qr code encoded");
        Ok(self)
    }

    // === Paper control ===

    /// Feed, cut (partial or full), then flush.
    ///
    /// A zero `feed` falls back to [`FEED_DEFAULT`].
    pub fn cut(&mut self, partial: bool, feed: u8) -> Vec<u8> {
        let lines = if feed == 0 { FEED_DEFAULT } else { feed };
        self.feed(lines);
        self.buf.write(if partial {
            paper::PART_CUT
        } else {
            paper::FULL_CUT
        });
        self.flush()
    }

    // === Cash drawer ===

    /// Kick the cash drawer on the given pin, then flush
    pub fn cashdraw(&mut self, pin: DrawerPin) -> Vec<u8> {
        self.buf.write(pin.bytes());
        self.flush()
    }

    // === Flush ===

    /// Return everything accumulated since the last flush and reset the
    /// buffer to empty
    pub fn flush(&mut self) -> Vec<u8> {
        let data = self.buf.flush();
        debug!(len = data.len(), "buffer flushed");
        data
    }
}
