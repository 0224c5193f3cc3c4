//! "Green" remote: a 13-byte pulse-distance code with checksum at 38 kHz.
//!
//! # Byte layout (before bit reversal)
//!
//! | byte | bits 7..5            | bits 4..3        | bits 2..0            |
//! |------|----------------------|------------------|----------------------|
//! | 0    | `0xC3` header        |                  |                      |
//! | 1    | 7..6: temp / 8 − 1   | 5..3: temp mod 8 | no vertical swing    |
//! | 2    | no horizontal swing  | 4..0: hour (0)   |                      |
//! | 3    | minute (0)           |                  |                      |
//! | 4    | fan                  | 0                | 0                    |
//! | 6    | mode                 | 0                | 2: sleep             |
//! | 9    | 5: power             |                  |                      |
//! | 11   | button code `0b101`  |                  |                      |
//! | 12   | checksum             |                  |                      |
//!
//! Bytes 5, 7, 8 and 10 are always zero.
//!
//! # Checksum and bit order
//!
//! Byte 12 is the sum of bytes 0–11, truncated to 8 bits.  After the checksum
//! is in place, *every* byte (the checksum included) has its bit order
//! reversed, and the reversed buffer is sent MSB first.  In other words the
//! logical bytes go out LSB first.
//!
//! The packet is a 9000 µs / 4500 µs AGC burst, the 104 data bits, and a
//! single closing unit mark.

use crate::domain::settings::{AcSettings, Fan, Mode};
use crate::protocol::layout::ByteField;
use crate::protocol::remote::RemoteProtocol;
use crate::signal::encoding::{BitEncoder, PulseDistance};
use crate::signal::timeline::Timeline;

/// Base time quantum in µs.
pub const UNIT_LENGTH: u32 = 560;

/// Length of the code buffer in bytes.
pub const CODE_BYTES: usize = 13;

/// Number of transmitted bits.
pub const CODE_BITS: usize = CODE_BYTES * 8;

/// Number of code blocks per packet.
pub const REPETITIONS: u8 = 1;

/// Carrier frequency in kHz.
pub const FREQUENCY_KHZ: u8 = 38;

/// AGC burst that opens the packet, in µs.
pub const HEADER_MARK: u32 = 9000;
pub const HEADER_SPACE: u32 = 4500;

/// Field positions inside the 13-byte code (pre-reversal bit numbering).
pub mod fields {
    use crate::protocol::layout::ByteField;

    pub const HEADER: ByteField = ByteField::new("header", 0, 0, 8);
    pub const NO_VERTICAL_SWING: ByteField = ByteField::new("no_vertical_swing", 1, 0, 3);
    pub const TEMPERATURE_MOD8: ByteField = ByteField::new("temperature_mod8", 1, 3, 3);
    pub const TEMPERATURE_DIV8: ByteField = ByteField::new("temperature_div8", 1, 6, 2);
    pub const HOUR: ByteField = ByteField::new("hour", 2, 0, 5);
    pub const NO_HORIZONTAL_SWING: ByteField = ByteField::new("no_horizontal_swing", 2, 5, 3);
    pub const MINUTE: ByteField = ByteField::new("minute", 3, 0, 8);
    pub const FAN: ByteField = ByteField::new("fan", 4, 5, 3);
    pub const SLEEP: ByteField = ByteField::new("sleep", 6, 2, 1);
    pub const MODE: ByteField = ByteField::new("mode", 6, 5, 3);
    pub const POWER: ByteField = ByteField::new("power", 9, 5, 1);
    pub const BUTTON: ByteField = ByteField::new("button", 11, 0, 8);
    pub const CHECKSUM: ByteField = ByteField::new("checksum", 12, 0, 8);

    /// Every non-padding field in byte order.
    pub const ALL: [ByteField; 13] = [
        HEADER,
        NO_VERTICAL_SWING,
        TEMPERATURE_MOD8,
        TEMPERATURE_DIV8,
        HOUR,
        NO_HORIZONTAL_SWING,
        MINUTE,
        FAN,
        SLEEP,
        MODE,
        POWER,
        BUTTON,
        CHECKSUM,
    ];
}

const HEADER_BYTE: u64 = 0xC3;
const SWING_DISABLED: u64 = 0b111;
const BUTTON_CODE: u64 = 0b101;

fn mode_code(mode: Mode) -> u64 {
    match mode {
        Mode::Cool => 0b001,
        Mode::Heat => 0b100,
        Mode::Fan => 0b110,
        Mode::Dry => 0b010,
        Mode::Auto => 0b000,
    }
}

fn mode_from_code(code: u64) -> Option<Mode> {
    Mode::ALL.into_iter().find(|&mode| mode_code(mode) == code)
}

fn fan_code(fan: Fan) -> u64 {
    match fan {
        Fan::Low => 0b011,
        Fan::Medium => 0b010,
        Fan::High => 0b001,
        Fan::Auto => 0b101,
    }
}

fn fan_from_code(code: u64) -> Option<Fan> {
    Fan::ALL.into_iter().find(|&fan| fan_code(fan) == code)
}

/// 8-bit wrapping sum of `bytes`.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, &byte| sum.wrapping_add(byte))
}

/// Packs `settings` into the logical (pre-reversal) 13-byte code, checksum
/// included.
pub fn encode_bytes(settings: &AcSettings) -> [u8; CODE_BYTES] {
    let temperature = settings.temperature;
    // The two fields together hold `temperature - 8` as a 5-bit number.
    let mod8 = temperature.rem_euclid(8) as u64;
    let div8 = temperature.div_euclid(8).wrapping_sub(1) as u64;
    let vertical = if settings.swing { 0 } else { SWING_DISABLED };

    let mut bytes = [0u8; CODE_BYTES];
    fields::HEADER.insert(&mut bytes, HEADER_BYTE);
    fields::NO_VERTICAL_SWING.insert(&mut bytes, vertical);
    fields::TEMPERATURE_MOD8.insert(&mut bytes, mod8);
    fields::TEMPERATURE_DIV8.insert(&mut bytes, div8);
    fields::HOUR.insert(&mut bytes, 0);
    fields::NO_HORIZONTAL_SWING.insert(&mut bytes, SWING_DISABLED);
    fields::MINUTE.insert(&mut bytes, 0);
    fields::FAN.insert(&mut bytes, fan_code(settings.fan));
    fields::SLEEP.insert(&mut bytes, u64::from(settings.sleep));
    fields::MODE.insert(&mut bytes, mode_code(settings.mode));
    fields::POWER.insert(&mut bytes, u64::from(settings.power));
    fields::BUTTON.insert(&mut bytes, BUTTON_CODE);

    let sum = checksum(&bytes[..CODE_BYTES - 1]);
    fields::CHECKSUM.insert(&mut bytes, u64::from(sum));
    bytes
}

/// The bytes exactly as they are clocked out: [`encode_bytes`] with every
/// byte bit-reversed.
pub fn wire_bytes(settings: &AcSettings) -> [u8; CODE_BYTES] {
    encode_bytes(settings).map(u8::reverse_bits)
}

/// Unpacks a logical (pre-reversal) Green code.
///
/// Returns `None` when the header, button code or checksum do not match, or
/// when the mode or fan code is unknown.
pub fn decode_bytes(bytes: &[u8; CODE_BYTES]) -> Option<AcSettings> {
    let field = |f: ByteField| f.extract(bytes).unwrap_or_default();

    if field(fields::HEADER) != HEADER_BYTE || field(fields::BUTTON) != BUTTON_CODE {
        return None;
    }
    if field(fields::CHECKSUM) != u64::from(checksum(&bytes[..CODE_BYTES - 1])) {
        return None;
    }

    let temperature = (field(fields::TEMPERATURE_DIV8) as i32 + 1) * 8
        + field(fields::TEMPERATURE_MOD8) as i32;

    Some(AcSettings {
        power: field(fields::POWER) == 1,
        mode: mode_from_code(field(fields::MODE))?,
        fan: fan_from_code(field(fields::FAN))?,
        temperature,
        swing: field(fields::NO_VERTICAL_SWING) == 0,
        sleep: field(fields::SLEEP) == 1,
    })
}

/// The Green remote protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreenRemote;

impl GreenRemote {
    fn encoder(&self) -> PulseDistance {
        PulseDistance::new(UNIT_LENGTH)
    }
}

impl RemoteProtocol for GreenRemote {
    fn name(&self) -> &'static str {
        "green"
    }

    fn modulation_frequency(&self) -> u8 {
        FREQUENCY_KHZ
    }

    fn packet_header(&self) -> Timeline {
        Timeline::from([HEADER_MARK, HEADER_SPACE])
    }

    fn packet_tail(&self) -> Timeline {
        Timeline::from([UNIT_LENGTH])
    }

    fn code_header(&self) -> Timeline {
        Timeline::new()
    }

    fn code_tail(&self) -> Timeline {
        Timeline::new()
    }

    fn code_repetitions(&self) -> u8 {
        REPETITIONS
    }

    fn code(&self, settings: &AcSettings) -> Timeline {
        self.encoder()
            .encode_buffer(&wire_bytes(settings), CODE_BITS)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
