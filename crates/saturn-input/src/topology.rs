//! Multitap (6Player Adaptor) bookkeeping.

/// Ports polled with no adaptor connected.
pub const BASE_PLAYERS: usize = 2;
/// Extra ports contributed by each connected adaptor.
pub const PLAYERS_PER_MULTITAP: usize = 5;

/// Which of the two physical ports carry a 6Player Adaptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortTopology {
    multitap: [bool; 2],
}

impl PortTopology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an adaptor is connected to physical port `port` (1 or 2).
    pub fn multitap(&self, port: u32) -> bool {
        Self::slot(port).is_some_and(|slot| self.multitap[slot])
    }

    /// Updates the adaptor flag of physical port `port` (1 or 2).
    ///
    /// Returns the zero-based adapter index when the flag actually changed,
    /// `None` when the request is a no-op or names an unknown port.
    pub fn set_multitap(&mut self, port: u32, enabled: bool) -> Option<usize> {
        let slot = Self::slot(port)?;
        if self.multitap[slot] == enabled {
            return None;
        }
        self.multitap[slot] = enabled;
        Some(slot)
    }

    /// Number of logical ports polled each frame.
    pub fn active_players(&self) -> usize {
        BASE_PLAYERS
            + self
                .multitap
                .iter()
                .filter(|&&enabled| enabled)
                .count()
                * PLAYERS_PER_MULTITAP
    }

    fn slot(port: u32) -> Option<usize> {
        match port {
            1 => Some(0),
            2 => Some(1),
            _ => None,
        }
    }
}
