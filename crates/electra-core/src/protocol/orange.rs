//! "Orange" remote: a 34-bit Manchester code sent three times at 33 kHz.
//!
//! # Code layout
//!
//! ```text
//!  33   32..30  29..28  27..26  25     24..23  22..19      18     17..2   1   0
//! ┌───┬───────┬───────┬───────┬──────┬───────┬───────────┬──────┬───────┬───┬───┐
//! │pwr│ mode  │  fan  │   0   │swing │   0   │ temp - 15 │sleep │   0   │ 1 │ 0 │
//! └───┴───────┴───────┴───────┴──────┴───────┴───────────┴──────┴───────┴───┴───┘
//! ```
//!
//! Each repetition is preceded by a 3-unit mark and a 3-unit space; the packet
//! ends with a 4-unit mark.  There is no checksum.

use crate::domain::settings::{AcSettings, Fan, Mode, MIN_TEMPERATURE};
use crate::protocol::layout::BitField;
use crate::protocol::remote::RemoteProtocol;
use crate::signal::encoding::{BitEncoder, Manchester};
use crate::signal::timeline::Timeline;

/// Base time quantum in µs.
pub const UNIT_LENGTH: u32 = 992;

/// Number of meaningful bits in the code.
pub const CODE_BITS: u32 = 34;

/// Number of code blocks per packet.
pub const REPETITIONS: u8 = 3;

/// Carrier frequency in kHz.
pub const FREQUENCY_KHZ: u8 = 33;

/// Field positions inside the 34-bit code.
pub mod fields {
    use crate::protocol::layout::BitField;

    pub const MARKER_LOW: BitField = BitField::new("marker_low", 0, 1);
    pub const MARKER_HIGH: BitField = BitField::new("marker_high", 1, 1);
    pub const SLEEP: BitField = BitField::new("sleep", 18, 1);
    pub const TEMPERATURE: BitField = BitField::new("temperature", 19, 4);
    pub const SWING: BitField = BitField::new("swing", 25, 1);
    pub const FAN: BitField = BitField::new("fan", 28, 2);
    pub const MODE: BitField = BitField::new("mode", 30, 3);
    pub const POWER: BitField = BitField::new("power", 33, 1);

    /// Every non-padding field, least significant first.
    pub const ALL: [BitField; 8] = [
        MARKER_LOW,
        MARKER_HIGH,
        SLEEP,
        TEMPERATURE,
        SWING,
        FAN,
        MODE,
        POWER,
    ];
}

/// Constant value of the two marker bits (bit 1 set, bit 0 clear).
const MARKER: u64 = 0b10;

fn mode_code(mode: Mode) -> u64 {
    match mode {
        Mode::Cool => 0b001,
        Mode::Heat => 0b010,
        Mode::Fan => 0b101,
        Mode::Dry => 0b100,
        Mode::Auto => 0b011,
    }
}

fn mode_from_code(code: u64) -> Option<Mode> {
    Mode::ALL.into_iter().find(|&mode| mode_code(mode) == code)
}

fn fan_code(fan: Fan) -> u64 {
    match fan {
        Fan::Low => 0b00,
        Fan::Medium => 0b01,
        Fan::High => 0b10,
        Fan::Auto => 0b11,
    }
}

fn fan_from_code(code: u64) -> Option<Fan> {
    Fan::ALL.into_iter().find(|&fan| fan_code(fan) == code)
}

/// Packs `settings` into the 34-bit Orange code.
///
/// Temperatures outside 15–30 wrap inside the 4-bit field.
pub fn encode_code(settings: &AcSettings) -> u64 {
    // Two's-complement wrap: 14 becomes 0b1111, 31 becomes 0b0000.
    let temperature = settings.temperature.wrapping_sub(MIN_TEMPERATURE) as u64;

    let mut code = 0;
    code = fields::MARKER_LOW.insert(code, MARKER);
    code = fields::MARKER_HIGH.insert(code, MARKER >> 1);
    code = fields::SLEEP.insert(code, u64::from(settings.sleep));
    code = fields::TEMPERATURE.insert(code, temperature);
    code = fields::SWING.insert(code, u64::from(settings.swing));
    code = fields::FAN.insert(code, fan_code(settings.fan));
    code = fields::MODE.insert(code, mode_code(settings.mode));
    code = fields::POWER.insert(code, u64::from(settings.power));
    code
}

/// Unpacks an Orange code.
///
/// Returns `None` when the marker bits are wrong, the mode code is unknown,
/// or bits outside the documented fields are set.
pub fn decode_code(code: u64) -> Option<AcSettings> {
    let known = fields::ALL
        .iter()
        .fold(0u64, |mask, field| mask | (field.mask() << field.offset));
    if code & !known != 0 {
        return None;
    }
    if fields::MARKER_LOW.extract(code) != MARKER & 1
        || fields::MARKER_HIGH.extract(code) != MARKER >> 1
    {
        return None;
    }

    Some(AcSettings {
        power: fields::POWER.extract(code) == 1,
        mode: mode_from_code(fields::MODE.extract(code))?,
        fan: fan_from_code(fields::FAN.extract(code))?,
        temperature: fields::TEMPERATURE.extract(code) as i32 + MIN_TEMPERATURE,
        swing: fields::SWING.extract(code) == 1,
        sleep: fields::SLEEP.extract(code) == 1,
    })
}

/// The Orange remote protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrangeRemote;

impl OrangeRemote {
    fn encoder(&self) -> Manchester {
        Manchester::new(UNIT_LENGTH)
    }
}

impl RemoteProtocol for OrangeRemote {
    fn name(&self) -> &'static str {
        "orange"
    }

    fn modulation_frequency(&self) -> u8 {
        FREQUENCY_KHZ
    }

    fn packet_header(&self) -> Timeline {
        Timeline::new()
    }

    fn packet_tail(&self) -> Timeline {
        Timeline::from([4 * UNIT_LENGTH])
    }

    fn code_header(&self) -> Timeline {
        Timeline::from([3 * UNIT_LENGTH, 3 * UNIT_LENGTH])
    }

    fn code_tail(&self) -> Timeline {
        Timeline::new()
    }

    fn code_repetitions(&self) -> u8 {
        REPETITIONS
    }

    fn code(&self, settings: &AcSettings) -> Timeline {
        self.encoder().encode_number(encode_code(settings), CODE_BITS)
    }
}

// Keep the field table honest: no two fields may overlap.
const _: () = {
    let mut i = 0;
    let mut seen = 0u64;
    while i < fields::ALL.len() {
        let field: BitField = fields::ALL[i];
        let bits = field.mask() << field.offset;
        assert!(seen & bits == 0, "overlapping Orange fields");
        assert!(field.offset + field.width <= CODE_BITS, "Orange field past bit 33");
        seen |= bits;
        i += 1;
    }
};

// ── Tests ─────────────────────────────────────────────────────────────────────
