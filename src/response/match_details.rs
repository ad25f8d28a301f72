use super::{GameItems, Heroes, Player, PlayerMinimal};
use crate::enums::{GameMode, LobbyType, Team};
use crate::types::{LeagueId, MatchId, MatchSeqNum, ServerTime, TeamId};
use serde::Serialize;

/// A match from a GetMatchDetails response.
///
/// When the requested match ID does not exist the API still responds successfully. In that case
/// `error` is set, `error_message` holds the message from the API, `players` is empty and the
/// remaining fields hold their defaults. Check `error` before using the match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    /// The ID of the match.
    pub match_id: MatchId,
    /// Set when the API reported an error for this match instead of match data.
    pub error: bool,
    /// The error message from the API when `error` is set.
    pub error_message: Option<String>,
    /// The sequence number of the match.
    pub match_seq_num: MatchSeqNum,
    /// When the match started.
    pub start_time: Option<ServerTime>,
    /// The length of the match in seconds.
    pub duration: u32,
    /// The game mode.
    pub game_mode: GameMode,
    /// The lobby type.
    pub lobby_type: LobbyType,
    /// Whether Radiant won.
    pub radiant_win: bool,
    /// Kills by Radiant.
    pub radiant_score: u32,
    /// Kills by Dire.
    pub dire_score: u32,
    /// Seconds into the match of the first kill.
    pub first_blood_time: u32,
    /// The league this match was played in, if any.
    pub leagueid: Option<LeagueId>,
    /// The team playing Radiant, if a registered team.
    pub radiant_team_id: Option<TeamId>,
    /// The team playing Dire, if a registered team.
    pub dire_team_id: Option<TeamId>,
    /// Players in slot order.
    pub players: Vec<Player>,
}

impl Match {
    /// Creates a match for an ID the API reported an error for.
    pub fn invalid(match_id: MatchId, message: Option<String>) -> Self {
        Self {
            match_id,
            error: true,
            error_message: message,
            match_seq_num: 0,
            start_time: None,
            duration: 0,
            game_mode: GameMode::NotSet,
            lobby_type: LobbyType::Invalid,
            radiant_win: false,
            radiant_score: 0,
            dire_score: 0,
            first_blood_time: 0,
            leagueid: None,
            radiant_team_id: None,
            dire_team_id: None,
            players: Vec::new(),
        }
    }

    /// The players reduced to their account and hero, in the same order as `players`.
    pub fn players_minimal(&self) -> Vec<PlayerMinimal> {
        self.players
            .iter()
            .map(Player::minimal)
            .collect()
    }

    /// The winning team. `None` when this match has an error.
    pub fn winner(&self) -> Option<Team> {
        if self.error {
            None
        } else if self.radiant_win {
            Some(Team::Radiant)
        } else {
            Some(Team::Dire)
        }
    }

    /// Players on the given team.
    pub fn team_players(&self, team: Team) -> impl Iterator<Item = &Player> {
        self.players
            .iter()
            .filter(move |player| player.team() == team)
    }

    /// Fills in hero and item names from metadata, returning the resolved match. Heroes and
    /// items not present in the metadata are left as they are.
    pub fn with_metadata(
        mut self,
        heroes: &Heroes,
        items: &GameItems,
    ) -> Self {
        for player in &mut self.players {
            if let Some(hero) = heroes.get(player.hero.id) {
                player.hero = hero.clone();
            }

            for item in player.items.iter_mut().chain(player.neutral_item.iter_mut()) {
                if let Some(resolved) = items.get(item.id) {
                    *item = resolved.clone();
                }
            }
        }

        self
    }
}
