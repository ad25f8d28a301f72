use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The side a player is on.
#[derive(Debug, Serialize, Deserialize, Display, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Team {
    Radiant,
    Dire,
}

impl Team {
    /// Gets the team from a player slot. The high bit of the slot is set for Dire players.
    pub fn from_player_slot(player_slot: u8) -> Self {
        if player_slot & 0x80 == 0 {
            Self::Radiant
        } else {
            Self::Dire
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_team_from_player_slot() {
        assert_eq!(Team::from_player_slot(0), Team::Radiant);
        assert_eq!(Team::from_player_slot(4), Team::Radiant);
        assert_eq!(Team::from_player_slot(128), Team::Dire);
        assert_eq!(Team::from_player_slot(132), Team::Dire);
    }
}
