//! Framing contract shared by the two remote protocols.
//!
//! # Packet structure
//!
//! ```text
//! packet_header
//! ┌───────────── repeated code_repetitions() times ─────────────┐
//! │ code_header  code(settings)  code_tail                      │
//! └─────────────────────────────────────────────────────────────┘
//! packet_tail
//! ```
//!
//! Every piece is a [`Timeline`], joined with [`Timeline::append`] so marks
//! and spaces that meet at a boundary merge exactly as they would on air.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::settings::AcSettings;
use crate::protocol::green::GreenRemote;
use crate::protocol::orange::OrangeRemote;
use crate::signal::timeline::Timeline;

/// One remote protocol: its constants, its payload encoding and its framing.
pub trait RemoteProtocol: Send + Sync {
    /// Short lowercase name used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Carrier frequency in kHz.
    fn modulation_frequency(&self) -> u8;

    /// Pulses sent once before the first code block.
    fn packet_header(&self) -> Timeline;

    /// Pulses sent once after the last code block.
    fn packet_tail(&self) -> Timeline;

    /// Pulses sent before every code block.
    fn code_header(&self) -> Timeline;

    /// Pulses sent after every code block.
    fn code_tail(&self) -> Timeline;

    /// How many times the code block is repeated inside one packet.
    fn code_repetitions(&self) -> u8;

    /// The encoded payload for `settings`, without any framing.
    fn code(&self, settings: &AcSettings) -> Timeline;

    /// The complete pulse train for `settings`, ready for the transmitter.
    fn full_packet(&self, settings: &AcSettings) -> Timeline {
        let code = self.code(settings);
        let code_header = self.code_header();
        let code_tail = self.code_tail();

        let mut packet = self.packet_header();
        for _ in 0..self.code_repetitions() {
            packet.append(&code_header);
            packet.append(&code);
            packet.append(&code_tail);
        }
        packet.append(&self.packet_tail());

        debug!(
            remote = self.name(),
            elements = packet.len(),
            airtime_us = packet.total_duration(),
            "built IR packet"
        );
        packet
    }
}

/// Selector for the two known remote variants.
///
/// The set is closed: Electra units understand exactly these two protocols,
/// so an enum is used instead of boxed trait objects in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Remote {
    /// 34-bit Manchester protocol at 33 kHz.
    Orange,
    /// 104-bit pulse-distance protocol with checksum at 38 kHz.
    Green,
}

impl Remote {
    /// Both remotes, in the order they are transmitted by default.
    pub const ALL: [Remote; 2] = [Remote::Orange, Remote::Green];

    /// The protocol implementation behind this selector.
    pub fn protocol(self) -> &'static dyn RemoteProtocol {
        match self {
            Remote::Orange => &OrangeRemote,
            Remote::Green => &GreenRemote,
        }
    }

    pub fn name(self) -> &'static str {
        self.protocol().name()
    }

    /// Carrier frequency in kHz.
    pub fn modulation_frequency(self) -> u8 {
        self.protocol().modulation_frequency()
    }

    /// See [`RemoteProtocol::full_packet`].
    pub fn full_packet(self, settings: &AcSettings) -> Timeline {
        self.protocol().full_packet(settings)
    }
}

impl fmt::Display for Remote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
