//! Electra A/C sender entry point.
//!
//! Loads the configuration, builds the Orange and Green packets for the
//! configured settings, and writes them as JSON lines to stdout for an LED
//! driver to replay.  Logs go to stderr so they never mix with the packets.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ resolve_config_path()  -- CLI argument, $ELECTRA_SEND_CONFIG, or default
//!  └─ load_config_from()     -- TOML file, defaults when missing
//!  └─ Dispatcher::send()
//!       ├─ Orange packet  -> JsonTransmitter (33 kHz)
//!       ├─ inter-frame gap
//!       └─ Green packet   -> JsonTransmitter (38 kHz)
//! ```
//!
//! # Usage
//!
//! ```text
//! electra-send [CONFIG_PATH]
//! RUST_LOG=debug electra-send ./living-room.toml | ir-driver --stdin
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::EnvFilter;

use electra_send::application::dispatch::Dispatcher;
use electra_send::infrastructure::storage::config::{load_config_from, resolve_config_path};
use electra_send::infrastructure::transmitter::JsonTransmitter;

fn main() -> anyhow::Result<()> {
    let config_path = resolve_config_path(std::env::args_os().nth(1).map(PathBuf::from));
    let config = load_config_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    // Initialise structured logging.  RUST_LOG overrides the config file.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    info!(
        config = %config_path.display(),
        temperature = config.settings.temperature,
        mode = ?config.settings.mode,
        fan = ?config.settings.fan,
        "Electra sender starting"
    );

    config.validate().context("invalid configuration")?;

    let dispatcher = Dispatcher::new(
        Arc::new(JsonTransmitter::stdout()),
        config.dispatch.to_dispatch_config(),
    );
    info!(
        remotes = ?dispatcher.config().remotes,
        gap_ms = dispatcher.config().inter_frame_gap.as_millis() as u64,
        "dispatching"
    );
    let report = dispatcher.send(&config.settings);

    if !report.all_delivered() {
        bail!(
            "{} of {} packets could not be transmitted",
            report.failures(),
            report.outcomes.len()
        );
    }

    info!(packets = report.outcomes.len(), "all packets transmitted");
    Ok(())
}
