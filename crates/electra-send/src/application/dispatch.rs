//! Dispatcher: builds the packets for every configured remote and hands them
//! to the IR transmitter, one after another.
//!
//! This use case sits at the application layer and delegates to an
//! [`IrTransmitter`] trait object for the physical transmission.  Concrete
//! transmitters live in the infrastructure layer.
//!
//! # Fire-and-forget (for beginners)
//!
//! An IR link has no back channel: the air conditioner never acknowledges a
//! packet.  A transmitter can at best report that *it* failed (for example a
//! broken pipe to the LED driver).  Such a failure is logged and recorded in
//! the [`DispatchReport`], and the remaining remotes are still sent.  There
//! are no retries.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use electra_core::{AcSettings, Remote, Timeline};
use thiserror::Error;
use tracing::{debug, error, info};

/// Pause between two consecutive packets when nothing else is configured.
pub const DEFAULT_INTER_FRAME_GAP: Duration = Duration::from_millis(100);

/// Error type for transmitter operations.
#[derive(Debug, Error)]
pub enum TransmitError {
    #[error("transmitter I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("transmitter error: {0}")]
    Device(String),
}

/// Port to the physical IR LED driver.
///
/// `durations` alternates mark and space lengths in µs, starting with a
/// mark; the element count is `durations.len()`.
#[cfg_attr(test, mockall::automock)]
pub trait IrTransmitter: Send + Sync {
    /// Emits one pulse train on a carrier of `frequency_khz`.
    fn transmit(&self, durations: &[u32], frequency_khz: u8) -> Result<(), TransmitError>;
}

/// Which remotes to send, in which order, and how long to pause in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub remotes: Vec<Remote>,
    pub inter_frame_gap: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            remotes: Remote::ALL.to_vec(),
            inter_frame_gap: DEFAULT_INTER_FRAME_GAP,
        }
    }
}

/// A finished packet for one remote, not yet transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub remote: Remote,
    pub frequency_khz: u8,
    pub timeline: Timeline,
}

impl Packet {
    /// Builds the full packet `remote` would send for `settings`.
    pub fn build(remote: Remote, settings: &AcSettings) -> Self {
        Self {
            remote,
            frequency_khz: remote.modulation_frequency(),
            timeline: remote.full_packet(settings),
        }
    }
}

/// What happened to one packet during [`Dispatcher::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmitOutcome {
    pub remote: Remote,
    pub frequency_khz: u8,
    /// Number of mark/space elements handed to the transmitter.
    pub elements: usize,
    /// `false` if the transmitter reported an error.
    pub delivered: bool,
}

/// Per-remote outcomes of one dispatch, in transmission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub outcomes: Vec<TransmitOutcome>,
}

impl DispatchReport {
    /// `true` when every transmission was accepted by the transmitter.
    pub fn all_delivered(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.delivered)
    }

    /// Number of transmissions the transmitter rejected.
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|outcome| !outcome.delivered).count()
    }
}

/// The Dispatch use case.
pub struct Dispatcher {
    transmitter: Arc<dyn IrTransmitter>,
    config: DispatchConfig,
}

impl Dispatcher {
    /// Creates a dispatcher for the given transmitter.
    pub fn new(transmitter: Arc<dyn IrTransmitter>, config: DispatchConfig) -> Self {
        Self {
            transmitter,
            config,
        }
    }

    /// The remotes and gap used by [`Dispatcher::send`].
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Builds the packets of every configured remote without sending them.
    pub fn packets(&self, settings: &AcSettings) -> Vec<Packet> {
        self.config
            .remotes
            .iter()
            .map(|&remote| Packet::build(remote, settings))
            .collect()
    }

    /// Sends `settings` through every configured remote.
    ///
    /// Blocks for the inter-frame gap between consecutive packets.
    pub fn send(&self, settings: &AcSettings) -> DispatchReport {
        self.send_with(settings, &self.config.remotes)
    }

    /// Sends `settings` through `remotes`, in the given order.
    pub fn send_with(&self, settings: &AcSettings, remotes: &[Remote]) -> DispatchReport {
        let mut report = DispatchReport::default();

        for (index, &remote) in remotes.iter().enumerate() {
            if index > 0 {
                self.pause();
            }

            let packet = Packet::build(remote, settings);
            let elements = packet.timeline.len();
            let delivered = match self
                .transmitter
                .transmit(packet.timeline.as_slice(), packet.frequency_khz)
            {
                Ok(()) => {
                    info!(
                        %remote,
                        frequency_khz = packet.frequency_khz,
                        elements,
                        "packet transmitted"
                    );
                    true
                }
                Err(e) => {
                    error!(%remote, "transmission failed: {e}");
                    false
                }
            };

            report.outcomes.push(TransmitOutcome {
                remote,
                frequency_khz: packet.frequency_khz,
                elements,
                delivered,
            });
        }

        report
    }

    fn pause(&self) {
        let gap = self.config.inter_frame_gap;
        if gap.is_zero() {
            return;
        }
        debug!(gap_ms = gap.as_millis() as u64, "waiting between packets");
        thread::sleep(gap);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
