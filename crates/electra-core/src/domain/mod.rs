//! Domain entities for the Electra encoder.
//!
//! This module holds the plain data the user controls on the physical
//! remote.  It has no knowledge of bits, pulses or protocols: the protocol
//! layer depends on the domain, never the other way round.

/// A/C settings and their validation rules.
///
/// See [`settings::AcSettings`] for the main type.
pub mod settings;
