//! Includes wrappers for API responses.

use super::raw::RawMatchSummary;
use crate::payload::Payload;
use crate::response::{GameItems, Heroes, MatchHistory, TournamentPrizePool, MATCH_HISTORY_STATUS_OK};
use crate::serialize::empty_string_is_none;
use serde::Deserialize;

/// The `result` object every response is wrapped in.
#[derive(Deserialize, Debug)]
pub struct ResultResponse<T> {
    pub result: T,
}

pub type GetMatchDetailsResponse = ResultResponse<Payload>;
pub type GetHeroesResponse = ResultResponse<Heroes>;
pub type GetGameItemsResponse = ResultResponse<GameItems>;
pub type GetTournamentPrizePoolResponse = ResultResponse<TournamentPrizePool>;
pub type GetMatchHistoryResponse = ResultResponse<GetMatchHistoryResponseBody>;

#[derive(Deserialize, Debug)]
pub struct GetMatchHistoryResponseBody {
    #[serde(default = "default_status")]
    pub status: u32,
    #[serde(default, rename = "statusDetail", deserialize_with = "empty_string_is_none")]
    pub status_detail: Option<String>,
    pub num_results: Option<u32>,
    pub total_results: Option<u32>,
    #[serde(default)]
    pub results_remaining: u32,
    #[serde(default)]
    pub matches: Vec<RawMatchSummary>,
}

impl From<GetMatchHistoryResponseBody> for MatchHistory {
    fn from(body: GetMatchHistoryResponseBody) -> Self {
        let matches = body.matches
            .into_iter()
            .map(Into::into)
            .collect::<Vec<_>>();
        // responses by sequence number do not include counters
        let num_results = body.num_results.unwrap_or(matches.len() as u32);

        Self {
            status: body.status,
            status_detail: body.status_detail,
            num_results,
            total_results: body.total_results.unwrap_or(num_results),
            results_remaining: body.results_remaining,
            matches,
        }
    }
}

fn default_status() -> u32 {
    MATCH_HISTORY_STATUS_OK
}
