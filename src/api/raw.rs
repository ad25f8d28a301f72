//! Payload shapes as sent by the API.

use crate::enums::{GameMode, LobbyType};
use crate::response::{Hero, Item, Match, MatchSummary, Player, PlayerMinimal, PlayerStats, SteamAccount};
use crate::serialize::{into_bool, zero_is_none};
use crate::types::{HeroId, ItemId, LeagueId, MatchId, MatchSeqNum, ServerTime, TeamId};
use serde::Deserialize;
use chrono::serde::ts_seconds_option;

/// A player from a GetMatchDetails or GetMatchHistoryBySequenceNum response.
#[derive(Debug, Deserialize)]
pub struct RawPlayer {
    #[serde(default)]
    pub account_id: Option<u64>,
    #[serde(default)]
    pub player_slot: u8,
    pub hero_id: HeroId,
    #[serde(default)]
    pub item_0: ItemId,
    #[serde(default)]
    pub item_1: ItemId,
    #[serde(default)]
    pub item_2: ItemId,
    #[serde(default)]
    pub item_3: ItemId,
    #[serde(default)]
    pub item_4: ItemId,
    #[serde(default)]
    pub item_5: ItemId,
    #[serde(default)]
    pub backpack_0: ItemId,
    #[serde(default)]
    pub backpack_1: ItemId,
    #[serde(default)]
    pub backpack_2: ItemId,
    #[serde(default)]
    pub item_neutral: ItemId,
    #[serde(flatten)]
    pub stats: PlayerStats,
}

impl RawPlayer {
    fn item_slots(&self) -> [ItemId; 9] {
        [
            self.item_0,
            self.item_1,
            self.item_2,
            self.item_3,
            self.item_4,
            self.item_5,
            self.backpack_0,
            self.backpack_1,
            self.backpack_2,
        ]
    }
}

impl From<RawPlayer> for Player {
    fn from(raw: RawPlayer) -> Self {
        let items = raw.item_slots()
            .into_iter()
            .filter_map(Item::from_slot)
            .collect();

        Self {
            account: SteamAccount::from_player_account_id(raw.account_id),
            player_slot: raw.player_slot,
            hero: Hero::new(raw.hero_id),
            neutral_item: Item::from_slot(raw.item_neutral),
            items,
            stats: raw.stats,
        }
    }
}

/// A player from a GetMatchHistory response.
#[derive(Debug, Deserialize)]
pub struct RawPlayerMinimal {
    #[serde(default)]
    pub account_id: Option<u64>,
    pub hero_id: HeroId,
}

impl From<RawPlayerMinimal> for PlayerMinimal {
    fn from(raw: RawPlayerMinimal) -> Self {
        Self {
            account: SteamAccount::from_player_account_id(raw.account_id),
            hero: Hero::new(raw.hero_id),
        }
    }
}

/// A match from a GetMatchDetails or GetMatchHistoryBySequenceNum response.
#[derive(Debug, Deserialize)]
pub struct RawMatch {
    pub match_id: MatchId,
    #[serde(default)]
    pub match_seq_num: MatchSeqNum,
    #[serde(default, with = "ts_seconds_option")]
    pub start_time: Option<ServerTime>,
    #[serde(default)]
    pub duration: u32,
    #[serde(default = "default_game_mode")]
    pub game_mode: GameMode,
    #[serde(default = "default_lobby_type")]
    pub lobby_type: LobbyType,
    #[serde(default, deserialize_with = "into_bool")]
    pub radiant_win: bool,
    #[serde(default)]
    pub radiant_score: u32,
    #[serde(default)]
    pub dire_score: u32,
    #[serde(default)]
    pub first_blood_time: u32,
    #[serde(default)]
    pub leagueid: LeagueId,
    #[serde(default, deserialize_with = "zero_is_none")]
    pub radiant_team_id: Option<TeamId>,
    #[serde(default, deserialize_with = "zero_is_none")]
    pub dire_team_id: Option<TeamId>,
    #[serde(default)]
    pub players: Vec<RawPlayer>,
}

impl From<RawMatch> for Match {
    fn from(raw: RawMatch) -> Self {
        Self {
            match_id: raw.match_id,
            error: false,
            error_message: None,
            match_seq_num: raw.match_seq_num,
            start_time: raw.start_time,
            duration: raw.duration,
            game_mode: raw.game_mode,
            lobby_type: raw.lobby_type,
            radiant_win: raw.radiant_win,
            radiant_score: raw.radiant_score,
            dire_score: raw.dire_score,
            first_blood_time: raw.first_blood_time,
            leagueid: Some(raw.leagueid).filter(|leagueid| *leagueid != 0),
            radiant_team_id: raw.radiant_team_id,
            dire_team_id: raw.dire_team_id,
            players: raw.players
                .into_iter()
                .map(Player::from)
                .collect(),
        }
    }
}

/// A match from a GetMatchHistory response.
#[derive(Debug, Deserialize)]
pub struct RawMatchSummary {
    pub match_id: MatchId,
    #[serde(default)]
    pub match_seq_num: MatchSeqNum,
    #[serde(default, with = "ts_seconds_option")]
    pub start_time: Option<ServerTime>,
    #[serde(default = "default_lobby_type")]
    pub lobby_type: LobbyType,
    #[serde(default, deserialize_with = "zero_is_none")]
    pub radiant_team_id: Option<TeamId>,
    #[serde(default, deserialize_with = "zero_is_none")]
    pub dire_team_id: Option<TeamId>,
    #[serde(default)]
    pub players: Vec<RawPlayerMinimal>,
}

impl From<RawMatchSummary> for MatchSummary {
    fn from(raw: RawMatchSummary) -> Self {
        Self {
            match_id: raw.match_id,
            match_seq_num: raw.match_seq_num,
            start_time: raw.start_time,
            lobby_type: raw.lobby_type,
            radiant_team_id: raw.radiant_team_id,
            dire_team_id: raw.dire_team_id,
            players: raw.players
                .into_iter()
                .map(PlayerMinimal::from)
                .collect(),
        }
    }
}

fn default_game_mode() -> GameMode {
    GameMode::NotSet
}

fn default_lobby_type() -> LobbyType {
    LobbyType::Invalid
}
