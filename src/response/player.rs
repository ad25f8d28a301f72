use super::{Hero, Item, SteamAccount};
use crate::enums::Team;
use crate::payload::Payload;
use serde::{Deserialize, Serialize};

/// A player in a match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    /// The account of the player. `None` for anonymous players.
    pub account: Option<SteamAccount>,
    /// The slot of the player. The high bit is set for Dire players and the low bits are the
    /// position within the team.
    pub player_slot: u8,
    /// The hero played.
    pub hero: Hero,
    /// Held items in slot order, inventory slots first then backpack slots. Empty slots are
    /// omitted.
    pub items: Vec<Item>,
    /// The item in the neutral slot.
    pub neutral_item: Option<Item>,
    /// Performance stats.
    pub stats: PlayerStats,
}

impl Player {
    /// The team of the player.
    pub fn team(&self) -> Team {
        Team::from_player_slot(self.player_slot)
    }

    /// Whether the player's profile is hidden.
    pub fn is_anonymous(&self) -> bool {
        self.account.is_none()
    }

    /// Gets the minimal view of this player.
    pub fn minimal(&self) -> PlayerMinimal {
        PlayerMinimal {
            account: self.account,
            hero: self.hero.clone(),
        }
    }
}

/// A player reduced to their account and hero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerMinimal {
    /// The account of the player. `None` for anonymous players.
    pub account: Option<SteamAccount>,
    /// The hero played.
    pub hero: Hero,
}

/// Performance stats for a player, as provided by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub last_hits: u32,
    #[serde(default)]
    pub denies: u32,
    #[serde(default)]
    pub gold_per_min: u32,
    #[serde(default)]
    pub xp_per_min: u32,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub net_worth: u32,
    #[serde(default)]
    pub hero_damage: u32,
    #[serde(default)]
    pub tower_damage: u32,
    #[serde(default)]
    pub hero_healing: u32,
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub gold_spent: u32,
    /// Any other fields provided for the player e.g. `leaver_status` or `ability_upgrades`.
    #[serde(flatten)]
    pub other: Payload,
}

impl PlayerStats {
    /// Kills plus assists over deaths, treating zero deaths as one.
    pub fn kda(&self) -> f64 {
        f64::from(self.kills + self.assists) / f64::from(self.deaths.max(1))
    }
}
