//! `IrTransmitter` implementations.

pub mod json;
pub mod mock;

pub use json::JsonTransmitter;
pub use mock::MockTransmitter;
