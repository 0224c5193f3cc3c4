//! Bit-to-pulse encoders.
//!
//! Both encoders are parameterised by a *unit length*: the base time quantum
//! of the protocol in µs.  Every mark and space they emit is a whole multiple
//! of it.
//!
//! ```text
//!                 bit 0            bit 1
//! Manchester      ▇▇▇▁▁▁           ▁▁▁▇▇▇          (1u + 1u)
//! PulseDistance   ▇▇▇▁▁▁           ▇▇▇▁▁▁▁▁▁▁▁▁    (1u + 1u / 1u + 3u)
//! ```
//!
//! Multi-bit values are always sent most significant bit first.

use crate::signal::timeline::Timeline;

/// Common contract of the bit encoders.
///
/// Implementors only describe how a single `0` and a single `1` look; the
/// number and buffer iterators are shared.
pub trait BitEncoder {
    /// Base time quantum in µs.
    fn unit_length(&self) -> u32;

    /// Appends the pulses for a `0` bit.
    fn add_zero(&self, timeline: &mut Timeline);

    /// Appends the pulses for a `1` bit.
    fn add_one(&self, timeline: &mut Timeline);

    /// Appends the pulses for `bit`.
    fn add_bit(&self, timeline: &mut Timeline, bit: bool) {
        if bit {
            self.add_one(timeline);
        } else {
            self.add_zero(timeline);
        }
    }

    /// Appends the low `width_bits` bits of `value`, MSB first.
    ///
    /// `width_bits` larger than 64 is clamped to 64.
    fn add_number(&self, timeline: &mut Timeline, value: u64, width_bits: u32) {
        for shift in (0..width_bits.min(u64::BITS)).rev() {
            self.add_bit(timeline, (value >> shift) & 1 == 1);
        }
    }

    /// Appends the first `width_bits` bits of `bytes`, MSB first within each
    /// byte.  Bit `j` of the stream is bit `7 - j % 8` of `bytes[j / 8]`.
    ///
    /// Stops early if `bytes` holds fewer than `width_bits` bits.
    fn add_buffer(&self, timeline: &mut Timeline, bytes: &[u8], width_bits: usize) {
        let bits = bytes
            .iter()
            .flat_map(|&byte| (0..8).rev().map(move |k| (byte >> k) & 1 == 1))
            .take(width_bits);
        for bit in bits {
            self.add_bit(timeline, bit);
        }
    }

    /// Encodes a number into a fresh timeline.
    fn encode_number(&self, value: u64, width_bits: u32) -> Timeline {
        let mut timeline = Timeline::new();
        self.add_number(&mut timeline, value, width_bits);
        timeline
    }

    /// Encodes a byte buffer into a fresh timeline.
    fn encode_buffer(&self, bytes: &[u8], width_bits: usize) -> Timeline {
        let mut timeline = Timeline::new();
        self.add_buffer(&mut timeline, bytes, width_bits);
        timeline
    }
}

/// Manchester (bi-phase) coding: `0` = mark then space, `1` = space then mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Manchester {
    unit_length: u32,
}

impl Manchester {
    /// Creates an encoder whose half-bit lasts `unit_length` µs.
    pub const fn new(unit_length: u32) -> Self {
        Self { unit_length }
    }
}

impl BitEncoder for Manchester {
    fn unit_length(&self) -> u32 {
        self.unit_length
    }

    fn add_zero(&self, timeline: &mut Timeline) {
        timeline.add_mark(self.unit_length);
        timeline.add_space(self.unit_length);
    }

    fn add_one(&self, timeline: &mut Timeline) {
        timeline.add_space(self.unit_length);
        timeline.add_mark(self.unit_length);
    }
}

/// Pulse-distance coding: a one-unit mark followed by a one-unit space (`0`)
/// or a three-unit space (`1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseDistance {
    unit_length: u32,
}

impl PulseDistance {
    /// Length of the space after a `1` bit, in units.
    pub const ONE_SPACE_UNITS: u32 = 3;

    /// Creates an encoder whose mark lasts `unit_length` µs.
    pub const fn new(unit_length: u32) -> Self {
        Self { unit_length }
    }
}

impl BitEncoder for PulseDistance {
    fn unit_length(&self) -> u32 {
        self.unit_length
    }

    fn add_zero(&self, timeline: &mut Timeline) {
        timeline.add_mark(self.unit_length);
        timeline.add_space(self.unit_length);
    }

    fn add_one(&self, timeline: &mut Timeline) {
        timeline.add_mark(self.unit_length);
        timeline.add_space(Self::ONE_SPACE_UNITS * self.unit_length);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
