use super::PlayerMinimal;
use crate::enums::LobbyType;
use crate::types::{MatchId, MatchSeqNum, ServerTime, TeamId};
use serde::Serialize;

/// The status the API uses for a successful match history response.
pub const MATCH_HISTORY_STATUS_OK: u32 = 1;

/// A page of matches.
///
/// Only the requested page is fetched. Use the counters to decide whether to request another
/// page, passing [`MatchHistory::next_start_at_match_id`] as the starting match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchHistory {
    /// The status reported by the API. `1` on success, `15` when the player's match history is
    /// private.
    pub status: u32,
    /// A message explaining a status other than success.
    pub status_detail: Option<String>,
    /// The number of matches in this page.
    pub num_results: u32,
    /// The total number of matches available for the query.
    pub total_results: u32,
    /// The number of matches remaining after this page.
    pub results_remaining: u32,
    /// The matches in this page, most recent first.
    pub matches: Vec<MatchSummary>,
}

impl MatchHistory {
    /// Whether the API reported success for this page.
    pub fn is_ok(&self) -> bool {
        self.status == MATCH_HISTORY_STATUS_OK
    }

    /// Whether more matches are available after this page.
    pub fn has_more(&self) -> bool {
        self.results_remaining > 0
    }

    /// The ID of the oldest match in this page.
    pub fn last_match_id(&self) -> Option<MatchId> {
        self.matches
            .last()
            .map(|summary| summary.match_id)
    }

    /// The `start_at_match_id` to use to request the following page, if there is one.
    pub fn next_start_at_match_id(&self) -> Option<MatchId> {
        if !self.has_more() {
            return None;
        }

        self.last_match_id()
            .and_then(|match_id| match_id.checked_sub(1))
    }
}

/// A match as listed in a match history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    /// The ID of the match.
    pub match_id: MatchId,
    /// The sequence number of the match.
    pub match_seq_num: MatchSeqNum,
    /// When the match started.
    pub start_time: Option<ServerTime>,
    /// The lobby type.
    pub lobby_type: LobbyType,
    /// The team playing Radiant, if a registered team.
    pub radiant_team_id: Option<TeamId>,
    /// The team playing Dire, if a registered team.
    pub dire_team_id: Option<TeamId>,
    /// Players in slot order.
    pub players: Vec<PlayerMinimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(match_id: MatchId) -> MatchSummary {
        MatchSummary {
            match_id,
            match_seq_num: 0,
            start_time: None,
            lobby_type: LobbyType::Ranked,
            radiant_team_id: None,
            dire_team_id: None,
            players: Vec::new(),
        }
    }

    fn history(results_remaining: u32) -> MatchHistory {
        MatchHistory {
            status: MATCH_HISTORY_STATUS_OK,
            status_detail: None,
            num_results: 2,
            total_results: 2 + results_remaining,
            results_remaining,
            matches: vec![summary(4176987886), summary(4176987000)],
        }
    }

    #[test]
    fn gets_next_page_start() {
        let page = history(10);

        assert!(page.has_more());
        assert_eq!(page.last_match_id(), Some(4176987000));
        assert_eq!(page.next_start_at_match_id(), Some(4176986999));
    }

    #[test]
    fn last_page_has_no_next_start() {
        let page = history(0);

        assert!(!page.has_more());
        assert_eq!(page.next_start_at_match_id(), None);
    }
}
