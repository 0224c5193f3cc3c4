//! electra-send library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does electra-send do? (for beginners)
//!
//! An Electra air conditioner listens to one of two remote protocols, and
//! from the outside there is no way to tell which one a given unit expects.
//! The sender therefore transmits the same settings twice:
//!
//! 1. Builds the Orange packet with `electra-core` and hands it to the IR
//!    transmitter at 33 kHz.
//! 2. Waits a short inter-frame gap so the receiver sees two separate
//!    packets.
//! 3. Builds the Green packet and hands it over at 38 kHz.
//!
//! The transmitter itself (the LED driver) is an external collaborator
//! behind the [`application::dispatch::IrTransmitter`] trait.

/// Application layer: the dispatch use case and the transmitter port.
pub mod application;

/// Infrastructure layer: transmitter adapters and configuration storage.
pub mod infrastructure;
