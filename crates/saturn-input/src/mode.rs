//! Per-port analog/digital mode and mode-switch edge detection.

use crate::device::ControllerVariant;

/// Packed bit: analog mode active.
const MODE_ANALOG: u16 = 1 << 0;
/// Packed bit: mode switch was held on the previous poll.
const MODE_PREVIOUS_HELD: u16 = 1 << 1;

/// Persisted mode flags of one port. Only meaningful for the 3D Control Pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeState {
    pub analog_mode_active: bool,
    pub previous_held: bool,
}

impl ModeState {
    /// State a port starts in right after `variant` is assigned to it.
    pub fn for_variant(variant: ControllerVariant) -> Self {
        Self {
            analog_mode_active: variant == ControllerVariant::ThreeDPad,
            previous_held: false,
        }
    }

    /// Feeds the current mode-switch level.
    ///
    /// Toggles analog mode on a rising edge and returns the new mode in that
    /// case. The held level is remembered on every call.
    pub fn update(&mut self, held: bool) -> Option<bool> {
        let toggled = if held && !self.previous_held {
            self.analog_mode_active = !self.analog_mode_active;
            Some(self.analog_mode_active)
        } else {
            None
        };
        self.previous_held = held;
        toggled
    }

    /// Packs into the legacy 16-bit save-state word.
    pub fn to_bits(self) -> u16 {
        let mut bits = 0;
        if self.analog_mode_active {
            bits |= MODE_ANALOG;
        }
        if self.previous_held {
            bits |= MODE_PREVIOUS_HELD;
        }
        bits
    }

    /// Unpacks a legacy save-state word, ignoring unknown bits.
    pub fn from_bits(bits: u16) -> Self {
        Self {
            analog_mode_active: bits & MODE_ANALOG != 0,
            previous_held: bits & MODE_PREVIOUS_HELD != 0,
        }
    }
}
