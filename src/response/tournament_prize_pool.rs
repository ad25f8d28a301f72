use crate::types::LeagueId;
use serde::{Deserialize, Serialize};

/// The prize pool of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentPrizePool {
    /// The league the prize pool belongs to.
    #[serde(default)]
    pub league_id: Option<LeagueId>,
    /// The prize pool in US dollars.
    pub prize_pool: u64,
}
