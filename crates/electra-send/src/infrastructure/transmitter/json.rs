//! JSON-lines transmitter.
//!
//! Writes every pulse train as one JSON object per line:
//!
//! ```text
//! {"frequency_khz":33,"durations":[2976,3968,1984,...,3968]}
//! {"frequency_khz":38,"durations":[9000,4500,560,1680,...,560]}
//! ```
//!
//! Pointed at stdout, this lets any LED driver (a USB IR dongle tool, a
//! microcontroller bridge on a serial port, ...) replay the packets without
//! linking against this crate.

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::application::dispatch::{IrTransmitter, TransmitError};

#[derive(Serialize)]
struct JsonPacket<'a> {
    frequency_khz: u8,
    durations: &'a [u32],
}

/// Serializes pulse trains to any [`Write`] sink.
#[derive(Debug)]
pub struct JsonTransmitter<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonTransmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl JsonTransmitter<Stdout> {
    /// A transmitter writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> IrTransmitter for JsonTransmitter<W> {
    fn transmit(&self, durations: &[u32], frequency_khz: u8) -> Result<(), TransmitError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| TransmitError::Device("JSON writer lock poisoned".into()))?;

        let packet = JsonPacket {
            frequency_khz,
            durations,
        };
        serde_json::to_writer(&mut *writer, &packet).map_err(io::Error::from)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
