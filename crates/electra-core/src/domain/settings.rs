//! The six user-facing A/C parameters carried by every IR packet.
//!
//! # Validation (for beginners)
//!
//! The physical remotes only offer temperatures between 15 °C and 30 °C.  The
//! protocol encoders do **not** check this: a value outside the range still
//! produces a well-formed pulse train, just with the wrong bits in it (both
//! layouts truncate the value to the width of their temperature fields).
//! Callers that accept untrusted input should build
//! settings with [`AcSettings::validated`] instead of [`AcSettings::new`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest temperature, in °C, offered by the remotes.
pub const MIN_TEMPERATURE: i32 = 15;

/// Highest temperature, in °C, offered by the remotes.
pub const MAX_TEMPERATURE: i32 = 30;

/// Error type for settings validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The requested temperature cannot be represented by the remotes.
    #[error("temperature {value} is outside the supported range {min}..={max}")]
    TemperatureOutOfRange { value: i32, min: i32, max: i32 },
}

/// Operating mode of the air conditioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Cool,
    Heat,
    Fan,
    Dry,
    Auto,
}

impl Mode {
    /// Every mode, in the order the remotes cycle through them.
    pub const ALL: [Mode; 5] = [Mode::Cool, Mode::Heat, Mode::Fan, Mode::Dry, Mode::Auto];
}

/// Fan speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fan {
    Low,
    Medium,
    High,
    Auto,
}

impl Fan {
    /// Every fan speed, slowest first.
    pub const ALL: [Fan; 4] = [Fan::Low, Fan::Medium, Fan::High, Fan::Auto];
}

/// One complete A/C state, as sent by a single button press.
///
/// IR A/C remotes are stateless on the wire: every packet carries the full
/// state, not just the button that changed.
///
/// Missing fields deserialize to the [`Default`] state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AcSettings {
    pub power: bool,
    pub mode: Mode,
    pub fan: Fan,
    /// Target temperature in °C.  Only 15–30 is meaningful.
    pub temperature: i32,
    pub swing: bool,
    pub sleep: bool,
}

impl AcSettings {
    /// Creates settings without any range checks.
    pub fn new(power: bool, mode: Mode, fan: Fan, temperature: i32, swing: bool, sleep: bool) -> Self {
        Self {
            power,
            mode,
            fan,
            temperature,
            swing,
            sleep,
        }
    }

    /// Creates settings, rejecting temperatures the remotes cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TemperatureOutOfRange`] when `temperature` is
    /// not within [`MIN_TEMPERATURE`]`..=`[`MAX_TEMPERATURE`].
    pub fn validated(
        power: bool,
        mode: Mode,
        fan: Fan,
        temperature: i32,
        swing: bool,
        sleep: bool,
    ) -> Result<Self, SettingsError> {
        let settings = Self::new(power, mode, fan, temperature, swing, sleep);
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that every field is inside the range the remotes support.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TemperatureOutOfRange`] for an unsupported
    /// temperature.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(SettingsError::TemperatureOutOfRange {
                value: self.temperature,
                min: MIN_TEMPERATURE,
                max: MAX_TEMPERATURE,
            });
        }
        Ok(())
    }
}

impl Default for AcSettings {
    fn default() -> Self {
        Self::new(true, Mode::Cool, Fan::Auto, 24, false, false)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
