//! Application layer use cases for the sender.
//!
//! - **`dispatch`** – Builds one packet per configured remote and forwards
//!   each to an [`dispatch::IrTransmitter`] implementation that is injected at
//!   construction time.

pub mod dispatch;
