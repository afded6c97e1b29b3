//! ESC/POS command table
//!
//! Static byte sequences for every supported command, grouped by category,
//! plus the handful of value-parameterized generators (custom text size,
//! barcode width/height) and the typed tags used to select table entries.
//!
//! The table is compiled-in and immutable; a name that cannot be resolved is
//! a caller error surfaced as [`EncodeError::UnknownName`] at parse time.

use crate::error::{EncodeError, EncodeResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// End-of-line sequence appended by `feed`
pub const EOL: &[u8] = b"\n";

/// Hardware commands
pub mod hardware {
    /// Initialize printer (ESC @)
    pub const INIT: &[u8] = &[0x1B, 0x40];
    /// Select printer as active peripheral (ESC = 1)
    pub const SELECT: &[u8] = &[0x1B, 0x3D, 0x01];
    /// Reset printer hardware (ESC ?)
    pub const RESET: &[u8] = &[0x1B, 0x3F, 0x0A, 0x00];
}

/// Text formatting commands
pub mod text_format {
    /// Bold on (ESC E 1)
    pub const BOLD_ON: &[u8] = &[0x1B, 0x45, 0x01];
    /// Bold off (ESC E 0)
    pub const BOLD_OFF: &[u8] = &[0x1B, 0x45, 0x00];

    /// Align left (ESC a 0)
    pub const ALIGN_LT: &[u8] = &[0x1B, 0x61, 0x00];
    /// Align center (ESC a 1)
    pub const ALIGN_CT: &[u8] = &[0x1B, 0x61, 0x01];
    /// Align right (ESC a 2)
    pub const ALIGN_RT: &[u8] = &[0x1B, 0x61, 0x02];

    /// Font A (ESC M 0)
    pub const FONT_A: &[u8] = &[0x1B, 0x4D, 0x00];
    /// Font B (ESC M 1)
    pub const FONT_B: &[u8] = &[0x1B, 0x4D, 0x01];
    /// Font C (ESC M 2)
    pub const FONT_C: &[u8] = &[0x1B, 0x4D, 0x02];

    /// Normal character size (GS ! 0x00)
    pub const NORMAL: &[u8] = &[0x1D, 0x21, 0x00];
    /// Double height (GS ! 0x01)
    pub const HEIGHT_2X: &[u8] = &[0x1D, 0x21, 0x01];
    /// Double width (GS ! 0x10)
    pub const WIDTH_2X: &[u8] = &[0x1D, 0x21, 0x10];
    /// Double width and height (GS ! 0x11)
    pub const QUAD: &[u8] = &[0x1D, 0x21, 0x11];
}

/// Margin commands; each is followed by one size byte
pub mod margins {
    /// Bottom margin (ESC O)
    pub const BOTTOM: &[u8] = &[0x1B, 0x4F];
    /// Left margin (ESC l)
    pub const LEFT: &[u8] = &[0x1B, 0x6C];
    /// Right margin (ESC Q)
    pub const RIGHT: &[u8] = &[0x1B, 0x51];
}

/// Line spacing commands
pub mod line_spacing {
    /// Restore default line spacing (ESC 2)
    pub const DEFAULT: &[u8] = &[0x1B, 0x32];
    /// Set line spacing (ESC 3); followed by one spacing byte
    pub const SET: &[u8] = &[0x1B, 0x33];
}

/// Feed control sequences
pub mod feed_control {
    /// Print and line feed
    pub const LF: &[u8] = &[0x0A];
    /// Form feed
    pub const FF: &[u8] = &[0x0C];
    /// Carriage return
    pub const CR: &[u8] = &[0x0D];
    /// Horizontal tab
    pub const HT: &[u8] = &[0x09];
    /// Vertical tab
    pub const VT: &[u8] = &[0x0B];
}

/// Barcode formatting commands
pub mod barcode {
    /// HRI font A (GS f 0)
    pub const FONT_A: &[u8] = &[0x1D, 0x66, 0x00];
    /// HRI font B (GS f 1)
    pub const FONT_B: &[u8] = &[0x1D, 0x66, 0x01];

    /// No human-readable text (GS H 0)
    pub const TXT_OFF: &[u8] = &[0x1D, 0x48, 0x00];
    /// Text above barcode (GS H 1)
    pub const TXT_ABOVE: &[u8] = &[0x1D, 0x48, 0x01];
    /// Text below barcode (GS H 2)
    pub const TXT_BELOW: &[u8] = &[0x1D, 0x48, 0x02];
    /// Text above and below (GS H 3)
    pub const TXT_BOTH: &[u8] = &[0x1D, 0x48, 0x03];

    // Symbology selectors (GS k m)
    pub const UPC_A: &[u8] = &[0x1D, 0x6B, 0x00];
    pub const UPC_E: &[u8] = &[0x1D, 0x6B, 0x01];
    pub const EAN13: &[u8] = &[0x1D, 0x6B, 0x02];
    pub const EAN8: &[u8] = &[0x1D, 0x6B, 0x03];
    pub const CODE39: &[u8] = &[0x1D, 0x6B, 0x04];
    pub const ITF: &[u8] = &[0x1D, 0x6B, 0x05];
    pub const NW7: &[u8] = &[0x1D, 0x6B, 0x06];
    pub const CODE93: &[u8] = &[0x1D, 0x6B, 0x48];
    pub const CODE128: &[u8] = &[0x1D, 0x6B, 0x49];

    /// Default module width (GS w 3)
    pub const WIDTH_DEFAULT: [u8; 3] = [0x1D, 0x77, 0x03];
    /// Default height, 100 dots (GS h 100)
    pub const HEIGHT_DEFAULT: [u8; 3] = [0x1D, 0x68, 0x64];
}

/// Two-dimensional code commands
pub mod code2d {
    /// QR code prefix (ESC Z); followed by version, level, size, LE16 length
    pub const QR: &[u8] = &[0x1B, 0x5A];
}

/// Cash drawer commands
pub mod cash_drawer {
    /// Kick drawer on pin 2 (ESC p 0, 25x2ms on, 250x2ms off)
    pub const KICK_2: &[u8] = &[0x1B, 0x70, 0x00, 0x19, 0xFA];
    /// Kick drawer on pin 5 (ESC p 1)
    pub const KICK_5: &[u8] = &[0x1B, 0x70, 0x01, 0x19, 0xFA];
}

/// Paper cut commands
pub mod paper {
    /// Full cut (GS V 0)
    pub const FULL_CUT: &[u8] = &[0x1D, 0x56, 0x00];
    /// Partial cut (GS V 1)
    pub const PART_CUT: &[u8] = &[0x1D, 0x56, 0x01];
}

// === Parameterized generators ===

/// Custom character size (GS !) for the given width/height multipliers.
///
/// Multipliers are clamped to 1..=8, the range GS ! can express.
pub fn custom_size(width: u8, height: u8) -> [u8; 3] {
    let w = width.clamp(1, 8);
    let h = height.clamp(1, 8);
    [0x1D, 0x21, ((w - 1) << 4) | (h - 1)]
}

/// Barcode module width command (GS w n).
///
/// The protocol defines widths 2..=6; anything else falls back to
/// [`barcode::WIDTH_DEFAULT`].
pub fn barcode_width(n: u8) -> [u8; 3] {
    match n {
        2..=6 => [0x1D, 0x77, n],
        _ => barcode::WIDTH_DEFAULT,
    }
}

/// Barcode height command (GS h n) for 1..=255 dots.
///
/// A zero height falls back to [`barcode::HEIGHT_DEFAULT`].
pub fn barcode_height(n: u8) -> [u8; 3] {
    match n {
        0 => barcode::HEIGHT_DEFAULT,
        _ => [0x1D, 0x68, n],
    }
}

// === Typed command tags ===

/// Feed control sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Control {
    Lf,
    Ff,
    Cr,
    Ht,
    Vt,
}

impl Control {
    /// Table entry for this control sequence
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Control::Lf => feed_control::LF,
            Control::Ff => feed_control::FF,
            Control::Cr => feed_control::CR,
            Control::Ht => feed_control::HT,
            Control::Vt => feed_control::VT,
        }
    }
}

impl FromStr for Control {
    type Err = EncodeError;

    fn from_str(s: &str) -> EncodeResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "LF" => Ok(Control::Lf),
            "FF" => Ok(Control::Ff),
            "CR" => Ok(Control::Cr),
            "HT" => Ok(Control::Ht),
            "VT" => Ok(Control::Vt),
            _ => Err(EncodeError::UnknownName {
                kind: "control sequence",
                name: s.to_string(),
            }),
        }
    }
}

/// Text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Alignment::Left => text_format::ALIGN_LT,
            Alignment::Center => text_format::ALIGN_CT,
            Alignment::Right => text_format::ALIGN_RT,
        }
    }
}

impl FromStr for Alignment {
    type Err = EncodeError;

    fn from_str(s: &str) -> EncodeResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "LT" | "LEFT" => Ok(Alignment::Left),
            "CT" | "CENTER" => Ok(Alignment::Center),
            "RT" | "RIGHT" => Ok(Alignment::Right),
            _ => Err(EncodeError::UnknownName {
                kind: "alignment",
                name: s.to_string(),
            }),
        }
    }
}

/// Character font family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Font {
    A,
    B,
    C,
}

impl Font {
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Font::A => text_format::FONT_A,
            Font::B => text_format::FONT_B,
            Font::C => text_format::FONT_C,
        }
    }
}

impl FromStr for Font {
    type Err = EncodeError;

    fn from_str(s: &str) -> EncodeResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Font::A),
            "B" => Ok(Font::B),
            "C" => Ok(Font::C),
            _ => Err(EncodeError::UnknownName {
                kind: "font",
                name: s.to_string(),
            }),
        }
    }
}

/// Barcode symbology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbology {
    UpcA,
    UpcE,
    Ean13,
    Ean8,
    Code39,
    Itf,
    Nw7,
    Code93,
    Code128,
}

impl Symbology {
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Symbology::UpcA => barcode::UPC_A,
            Symbology::UpcE => barcode::UPC_E,
            Symbology::Ean13 => barcode::EAN13,
            Symbology::Ean8 => barcode::EAN8,
            Symbology::Code39 => barcode::CODE39,
            Symbology::Itf => barcode::ITF,
            Symbology::Nw7 => barcode::NW7,
            Symbology::Code93 => barcode::CODE93,
            Symbology::Code128 => barcode::CODE128,
        }
    }

    /// Protocol name, as it appears in error messages
    pub fn name(self) -> &'static str {
        match self {
            Symbology::UpcA => "UPC_A",
            Symbology::UpcE => "UPC_E",
            Symbology::Ean13 => "EAN13",
            Symbology::Ean8 => "EAN8",
            Symbology::Code39 => "CODE39",
            Symbology::Itf => "ITF",
            Symbology::Nw7 => "NW7",
            Symbology::Code93 => "CODE93",
            Symbology::Code128 => "CODE128",
        }
    }
}

impl FromStr for Symbology {
    type Err = EncodeError;

    fn from_str(s: &str) -> EncodeResult<Self> {
        // Hyphenated spellings ("UPC-A", "CODE-128") resolve like underscored
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "UPC_A" | "UPCA" => Ok(Symbology::UpcA),
            "UPC_E" | "UPCE" => Ok(Symbology::UpcE),
            "EAN13" | "EAN_13" => Ok(Symbology::Ean13),
            "EAN8" | "EAN_8" => Ok(Symbology::Ean8),
            "CODE39" | "CODE_39" => Ok(Symbology::Code39),
            "ITF" => Ok(Symbology::Itf),
            "NW7" => Ok(Symbology::Nw7),
            "CODE93" | "CODE_93" => Ok(Symbology::Code93),
            "CODE128" | "CODE_128" => Ok(Symbology::Code128),
            _ => Err(EncodeError::UnknownName {
                kind: "barcode symbology",
                name: s.to_string(),
            }),
        }
    }
}

/// Barcode HRI font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BarcodeFont {
    A,
    #[default]
    B,
}

impl BarcodeFont {
    pub fn bytes(self) -> &'static [u8] {
        match self {
            BarcodeFont::A => barcode::FONT_A,
            BarcodeFont::B => barcode::FONT_B,
        }
    }
}

impl FromStr for BarcodeFont {
    type Err = EncodeError;

    fn from_str(s: &str) -> EncodeResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(BarcodeFont::A),
            "B" => Ok(BarcodeFont::B),
            _ => Err(EncodeError::UnknownName {
                kind: "barcode font",
                name: s.to_string(),
            }),
        }
    }
}

/// Barcode human-readable text position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BarcodeTextPosition {
    Off,
    Above,
    Below,
    #[default]
    Both,
}

impl BarcodeTextPosition {
    pub fn bytes(self) -> &'static [u8] {
        match self {
            BarcodeTextPosition::Off => barcode::TXT_OFF,
            BarcodeTextPosition::Above => barcode::TXT_ABOVE,
            BarcodeTextPosition::Below => barcode::TXT_BELOW,
            BarcodeTextPosition::Both => barcode::TXT_BOTH,
        }
    }
}

impl FromStr for BarcodeTextPosition {
    type Err = EncodeError;

    fn from_str(s: &str) -> EncodeResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "OFF" => Ok(BarcodeTextPosition::Off),
            "ABV" | "ABOVE" => Ok(BarcodeTextPosition::Above),
            "BLW" | "BELOW" => Ok(BarcodeTextPosition::Below),
            "BTH" | "BOTH" => Ok(BarcodeTextPosition::Both),
            _ => Err(EncodeError::UnknownName {
                kind: "barcode text position",
                name: s.to_string(),
            }),
        }
    }
}

/// Hardware command selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HardwareCommand {
    Init,
    Select,
    Reset,
}

impl HardwareCommand {
    pub fn bytes(self) -> &'static [u8] {
        match self {
            HardwareCommand::Init => hardware::INIT,
            HardwareCommand::Select => hardware::SELECT,
            HardwareCommand::Reset => hardware::RESET,
        }
    }
}

impl FromStr for HardwareCommand {
    type Err = EncodeError;

    fn from_str(s: &str) -> EncodeResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "INIT" => Ok(HardwareCommand::Init),
            "SELECT" => Ok(HardwareCommand::Select),
            "RESET" => Ok(HardwareCommand::Reset),
            _ => Err(EncodeError::UnknownName {
                kind: "hardware command",
                name: s.to_string(),
            }),
        }
    }
}

/// Cash drawer kick pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DrawerPin {
    #[default]
    #[serde(rename = "2")]
    Pin2,
    #[serde(rename = "5")]
    Pin5,
}

impl DrawerPin {
    pub fn bytes(self) -> &'static [u8] {
        match self {
            DrawerPin::Pin2 => cash_drawer::KICK_2,
            DrawerPin::Pin5 => cash_drawer::KICK_5,
        }
    }
}

impl FromStr for DrawerPin {
    type Err = EncodeError;

    fn from_str(s: &str) -> EncodeResult<Self> {
        match s {
            "2" => Ok(DrawerPin::Pin2),
            "5" => Ok(DrawerPin::Pin5),
            _ => Err(EncodeError::UnknownName {
                kind: "drawer pin",
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_resolve_case_insensitively() {
        assert_eq!("lf".parse::<Control>().unwrap(), Control::Lf);
        assert_eq!("Ct".parse::<Alignment>().unwrap(), Alignment::Center);
        assert_eq!("left".parse::<Alignment>().unwrap(), Alignment::Left);
        assert_eq!("b".parse::<Font>().unwrap(), Font::B);
        assert_eq!("bth".parse::<BarcodeTextPosition>().unwrap(), BarcodeTextPosition::Both);
    }

    #[test]
    fn tag_bytes_match_table() {
        assert_eq!(Control::Ff.bytes(), feed_control::FF);
        assert_eq!(Alignment::Right.bytes(), text_format::ALIGN_RT);
        assert_eq!(Font::C.bytes(), text_format::FONT_C);
        assert_eq!(Symbology::Code128.bytes(), barcode::CODE128);
        assert_eq!(HardwareCommand::Reset.bytes(), hardware::RESET);
    }

    #[test]
    fn unknown_name_is_a_typed_error() {
        let err = "WAT".parse::<Alignment>().unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnknownName {
                kind: "alignment",
                name: "WAT".into()
            }
        );
        assert!("ean99".parse::<Symbology>().is_err());
    }

    #[test]
    fn symbology_accepts_hyphenated_names() {
        assert_eq!("upc-a".parse::<Symbology>().unwrap(), Symbology::UpcA);
        assert_eq!("EAN-13".parse::<Symbology>().unwrap(), Symbology::Ean13);
        assert_eq!("code-128".parse::<Symbology>().unwrap(), Symbology::Code128);
    }

    #[test]
    fn custom_size_packs_multipliers() {
        assert_eq!(custom_size(3, 1), [0x1D, 0x21, 0x20]);
        assert_eq!(custom_size(1, 4), [0x1D, 0x21, 0x03]);
        assert_eq!(custom_size(8, 8), [0x1D, 0x21, 0x77]);
        // Out-of-range multipliers clamp rather than overflow the nibble
        assert_eq!(custom_size(0, 20), [0x1D, 0x21, 0x07]);
    }

    #[test]
    fn barcode_width_out_of_range_uses_default() {
        assert_eq!(barcode_width(2), [0x1D, 0x77, 0x02]);
        assert_eq!(barcode_width(6), [0x1D, 0x77, 0x06]);
        assert_eq!(barcode_width(1), barcode::WIDTH_DEFAULT);
        assert_eq!(barcode_width(7), barcode::WIDTH_DEFAULT);
        assert_eq!(barcode_width(0), barcode::WIDTH_DEFAULT);
    }

    #[test]
    fn barcode_height_zero_uses_default() {
        assert_eq!(barcode_height(100), [0x1D, 0x68, 100]);
        assert_eq!(barcode_height(255), [0x1D, 0x68, 0xFF]);
        assert_eq!(barcode_height(0), barcode::HEIGHT_DEFAULT);
    }

    #[test]
    fn tags_deserialize_from_protocol_names() {
        let sym: Symbology = serde_json::from_str("\"EAN13\"").unwrap();
        assert_eq!(sym, Symbology::Ean13);
        let pin: DrawerPin = serde_json::from_str("\"5\"").unwrap();
        assert_eq!(pin, DrawerPin::Pin5);
    }
}
