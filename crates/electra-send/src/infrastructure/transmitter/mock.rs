//! Mock IR transmitter for testing.
//!
//! # Why a mock transmitter?
//!
//! A real transmitter drives an IR LED, which:
//!
//! - Requires the hardware to be attached.
//! - Cannot be observed from Rust test code (the A/C does not answer).
//!
//! The `MockTransmitter` replaces the LED with in-memory recording.  Each
//! transmitted pulse train is pushed into a `Mutex<Vec<...>>` so that test
//! assertions can inspect exactly what was sent and in what order.
//!
//! # Usage in tests
//!
//! ```ignore
//! let transmitter = Arc::new(MockTransmitter::new());
//! let dispatcher = Dispatcher::new(transmitter.clone(), DispatchConfig::default());
//!
//! dispatcher.send(&settings);
//!
//! let sent = transmitter.transmissions();
//! assert_eq!(sent[0].frequency_khz, 33);
//! ```
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` to make every call return
//! `TransmitError::Device`.  This lets you test the dispatcher's error
//! handling without a broken LED driver.

use std::sync::Mutex;

use crate::application::dispatch::{IrTransmitter, TransmitError};

/// One recorded call to [`IrTransmitter::transmit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    pub durations: Vec<u32>,
    pub frequency_khz: u8,
}

/// A mock transmitter that records all calls without touching hardware.
#[derive(Debug, Default)]
pub struct MockTransmitter {
    /// Every pulse train passed to `transmit`, oldest first.  Failed calls
    /// are recorded too.
    pub sent: Mutex<Vec<Transmission>>,
    /// When `true`, every call returns a `TransmitError::Device`.
    pub should_fail: bool,
}

impl MockTransmitter {
    /// Creates a new `MockTransmitter` with no records and `should_fail = false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transmitter whose every call fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Snapshot of the recorded transmissions.
    pub fn transmissions(&self) -> Vec<Transmission> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl IrTransmitter for MockTransmitter {
    /// Records the pulse train, then fails if `should_fail` is set.
    fn transmit(&self, durations: &[u32], frequency_khz: u8) -> Result<(), TransmitError> {
        self.sent
            .lock()
            .map_err(|_| TransmitError::Device("mock transmitter lock poisoned".into()))?
            .push(Transmission {
                durations: durations.to_vec(),
                frequency_khz,
            });

        if self.should_fail {
            return Err(TransmitError::Device("mock failure".into()));
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
