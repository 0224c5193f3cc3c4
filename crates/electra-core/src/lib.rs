//! # electra-core
//!
//! Encoder library for the infrared remote protocols of Electra air
//! conditioners.  It turns a handful of A/C settings into the raw mark/space
//! pulse train that an IR LED driver replays.
//!
//! This crate has zero dependencies on hardware, OS APIs, or I/O.  The
//! transmission side lives in `electra-send`.
//!
//! # Architecture overview (for beginners)
//!
//! An infrared remote does not send bytes; it switches a modulated carrier on
//! ("mark") and off ("space") for precise amounts of time.  Encoding a button
//! press is therefore a three step pipeline:
//!
//! - **`domain`** – The [`AcSettings`] the user wants (power, mode, fan,
//!   temperature, swing, sleep) and the validation rules for them.
//!
//! - **`signal`** – The [`Timeline`] that accumulates alternating mark/space
//!   durations, and the two [`BitEncoder`]s that turn bits into timeline
//!   fragments: [`Manchester`] and [`PulseDistance`].
//!
//! - **`protocol`** – The two remote variants.  Each one packs the settings
//!   into its own bit layout ([`OrangeRemote`]: a 34-bit integer,
//!   [`GreenRemote`]: a 13-byte buffer with a checksum) and frames the encoded
//!   bits with headers, repetitions and a trailing mark.
//!
//! ```rust
//! use electra_core::{AcSettings, Fan, Mode, Remote};
//!
//! let settings = AcSettings::new(true, Mode::Cool, Fan::Low, 24, false, false);
//! let packet = Remote::Green.full_packet(&settings);
//! assert_eq!(&packet.as_slice()[..2], &[9000, 4500]);
//! assert_eq!(Remote::Green.modulation_frequency(), 38);
//! ```

pub mod domain;
pub mod protocol;
pub mod signal;

// Re-export the most-used types at the crate root so callers can write
// `electra_core::Timeline` instead of `electra_core::signal::timeline::Timeline`.
pub use domain::settings::{AcSettings, Fan, Mode, SettingsError, MAX_TEMPERATURE, MIN_TEMPERATURE};
pub use protocol::green::GreenRemote;
pub use protocol::orange::OrangeRemote;
pub use protocol::remote::{Remote, RemoteProtocol};
pub use signal::encoding::{BitEncoder, Manchester, PulseDistance};
pub use signal::timeline::{Level, Timeline};
