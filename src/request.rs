//! Models for making requests.

use crate::response::SteamAccount;
use crate::types::{HeroId, LeagueId, MatchId, MatchSeqNum};
use serde::Serialize;

/// Options for getting a page of match history. Unset options are left out of the request.
#[derive(Debug, Default, Clone, Serialize)]
pub struct GetMatchHistoryOptions {
    /// Only matches where this hero was played.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_id: Option<HeroId>,
    /// Only matches of this game mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_mode: Option<u8>,
    /// Skill bracket for the matches. Ignored when `account_id` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<u8>,
    /// Minimum number of human players.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_players: Option<u32>,
    /// Only matches played by this account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<SteamAccount>,
    /// Only matches from this league.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league_id: Option<LeagueId>,
    /// Start the page at this match ID, going back in time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at_match_id: Option<MatchId>,
    /// The number of matches to request. The API caps this at 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches_requested: Option<u32>,
}

/// Options for getting matches in the order they were recorded.
#[derive(Debug, Default, Clone, Serialize)]
pub struct GetMatchHistoryBySequenceNumOptions {
    /// Start at this sequence number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at_match_seq_num: Option<MatchSeqNum>,
    /// The number of matches to request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches_requested: Option<u32>,
}
