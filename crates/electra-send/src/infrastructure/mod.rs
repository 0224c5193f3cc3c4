//! Infrastructure layer for the sender.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `electra_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`transmitter`** – Implementations of `IrTransmitter`: a JSON writer
//!   that hands pulse trains to an external LED driver process, and a
//!   `MockTransmitter` for tests.
//!
//! - **`storage`** – TOML configuration file loading and saving.

pub mod storage;
pub mod transmitter;
