use serde::{Deserialize, Serialize};

use crate::{deadzone, error::InputError};

/// User-facing input options.
///
/// Frontends feed their core options in as percentages and the settings keep
/// them that way; the translation engine reads the converted magnitudes.
/// Deserialized records go through the same range checks as the setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SettingsRecord", into = "SettingsRecord")]
pub struct InputSettings {
    /// Stick / wheel deadzone, `[0, 100]` percent.
    stick_deadzone: u32,
    /// Analog trigger deadzone, `[0, 100]` percent.
    trigger_deadzone: u32,
    /// Mouse motion scale, `(0, 200]` percent.
    mouse_sensitivity: u32,
}

/// Persisted form of [`InputSettings`], in percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SettingsRecord {
    stick_deadzone: i32,
    trigger_deadzone: i32,
    mouse_sensitivity: i32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            stick_deadzone: 0,
            trigger_deadzone: 0,
            mouse_sensitivity: 100,
        }
    }
}

impl InputSettings {
    /// Stick deadzone magnitude in `[0, 0x8000]`.
    pub fn stick_deadzone(&self) -> i32 {
        deadzone::from_percent(self.stick_deadzone)
    }

    /// Trigger deadzone magnitude in `[0, 0x8000]`.
    pub fn trigger_deadzone(&self) -> i32 {
        deadzone::from_percent(self.trigger_deadzone)
    }

    /// Multiplier applied to relative mouse motion, in `(0.0, 2.0]`.
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity as f32 / 100.0
    }

    /// Sets the stick deadzone from a percentage in `[0, 100]`.
    ///
    /// Returns `false` and keeps the current value when out of range.
    pub fn set_stick_deadzone(&mut self, percent: i32) -> bool {
        match deadzone_percent(percent) {
            Some(value) => {
                self.stick_deadzone = value;
                true
            }
            None => {
                tracing::debug!(percent, "ignoring out-of-range stick deadzone");
                false
            }
        }
    }

    /// Sets the trigger deadzone from a percentage in `[0, 100]`.
    pub fn set_trigger_deadzone(&mut self, percent: i32) -> bool {
        match deadzone_percent(percent) {
            Some(value) => {
                self.trigger_deadzone = value;
                true
            }
            None => {
                tracing::debug!(percent, "ignoring out-of-range trigger deadzone");
                false
            }
        }
    }

    /// Sets mouse sensitivity from a percentage in `(0, 200]`.
    pub fn set_mouse_sensitivity(&mut self, percent: i32) -> bool {
        match u32::try_from(percent) {
            Ok(value @ 1..=200) => {
                self.mouse_sensitivity = value;
                true
            }
            _ => {
                tracing::debug!(percent, "ignoring out-of-range mouse sensitivity");
                false
            }
        }
    }
}

fn deadzone_percent(percent: i32) -> Option<u32> {
    u32::try_from(percent).ok().filter(|&percent| percent <= 100)
}

impl TryFrom<SettingsRecord> for InputSettings {
    type Error = InputError;

    fn try_from(record: SettingsRecord) -> Result<Self, Self::Error> {
        let mut settings = Self::default();
        let checks = [
            (
                "stick_deadzone",
                record.stick_deadzone,
                settings.set_stick_deadzone(record.stick_deadzone),
            ),
            (
                "trigger_deadzone",
                record.trigger_deadzone,
                settings.set_trigger_deadzone(record.trigger_deadzone),
            ),
            (
                "mouse_sensitivity",
                record.mouse_sensitivity,
                settings.set_mouse_sensitivity(record.mouse_sensitivity),
            ),
        ];
        match checks.into_iter().find(|&(_, _, accepted)| !accepted) {
            Some((name, value, _)) => Err(InputError::InvalidSetting { name, value }),
            None => Ok(settings),
        }
    }
}

impl From<InputSettings> for SettingsRecord {
    fn from(settings: InputSettings) -> Self {
        // Stored values never exceed 200.
        Self {
            stick_deadzone: settings.stick_deadzone as i32,
            trigger_deadzone: settings.trigger_deadzone as i32,
            mouse_sensitivity: settings.mouse_sensitivity as i32,
        }
    }
}
