//! Save-state record of the input layer.
//!
//! Only the per-port [`ModeState`] survives a save/load cycle. Each entry is
//! stored as the legacy packed word so states stay interchangeable with the
//! `pad-mode` array older cores wrote.

use serde::{Deserialize, Serialize};

use crate::{MAX_PORTS, error::InputError, mode::ModeState};

/// Name of the record inside a full save state.
pub const STATE_SECTION: &str = "LIBRETRO-INPUT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    section: String,
    #[serde(rename = "pad-mode")]
    pad_mode: [u16; MAX_PORTS],
}

impl InputState {
    pub fn capture(modes: [ModeState; MAX_PORTS]) -> Self {
        Self {
            section: STATE_SECTION.to_owned(),
            pad_mode: modes.map(ModeState::to_bits),
        }
    }

    pub fn modes(&self) -> [ModeState; MAX_PORTS] {
        self.pad_mode.map(ModeState::from_bits)
    }

    pub fn to_postcard_bytes(&self) -> Result<Vec<u8>, InputError> {
        Ok(postcard::to_stdvec(self)?)
    }

    /// Decodes a record, rejecting records written by another subsystem and
    /// buffers that hold more than one record.
    pub fn from_postcard_bytes(bytes: &[u8]) -> Result<Self, InputError> {
        let (state, rest): (Self, _) = postcard::take_from_bytes(bytes)?;
        if !rest.is_empty() {
            return Err(InputError::TrailingBytes { count: rest.len() });
        }
        if state.section != STATE_SECTION {
            return Err(InputError::SectionMismatch {
                expected: STATE_SECTION,
                found: state.section,
            });
        }
        Ok(state)
    }
}
