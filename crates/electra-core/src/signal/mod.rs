//! Pulse-level building blocks shared by both remote protocols.

pub mod encoding;
pub mod timeline;

pub use encoding::{BitEncoder, Manchester, PulseDistance};
pub use timeline::{Level, Timeline};
