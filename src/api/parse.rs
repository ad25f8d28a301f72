//! Parsers turning response bodies into models.
//!
//! These are the same parsers [`DotaAPI`](super::DotaAPI) uses after a successful response and
//! can be used on bodies obtained elsewhere.

use super::raw::RawMatch;
use super::response_wrappers::{
    GetGameItemsResponse,
    GetHeroesResponse,
    GetMatchDetailsResponse,
    GetMatchHistoryResponse,
    GetTournamentPrizePoolResponse,
};
use crate::error::Error;
use crate::response::{GameItems, Heroes, Match, MatchHistory, TournamentPrizePool};
use crate::types::MatchId;

/// The key present in a GetMatchDetails result when the match could not be found.
const MATCH_ERROR_KEY: &str = "error";

/// Parses a GetMatchDetails body.
///
/// A result carrying an error, which the API returns for unknown match IDs, produces a [`Match`]
/// with `error` set rather than an `Err`.
pub fn match_details(match_id: MatchId, body: &[u8]) -> Result<Match, Error> {
    let response: GetMatchDetailsResponse = serde_json::from_slice(body)?;
    let result = response.result;

    if result.contains_key(MATCH_ERROR_KEY) {
        let message = result.field::<Option<String>>(MATCH_ERROR_KEY)?;

        log::debug!("Match {match_id} has an error: {message:?}");

        return Ok(Match::invalid(match_id, message));
    }

    let raw = result.deserialize_into::<RawMatch>()?;

    Ok(raw.into())
}

/// Parses a GetMatchHistory or GetMatchHistoryBySequenceNum body.
pub fn match_history(body: &[u8]) -> Result<MatchHistory, Error> {
    let response: GetMatchHistoryResponse = serde_json::from_slice(body)?;

    Ok(response.result.into())
}

/// Parses a GetHeroes body.
pub fn heroes(body: &[u8]) -> Result<Heroes, Error> {
    let response: GetHeroesResponse = serde_json::from_slice(body)?;

    Ok(response.result)
}

/// Parses a GetGameItems body.
pub fn game_items(body: &[u8]) -> Result<GameItems, Error> {
    let response: GetGameItemsResponse = serde_json::from_slice(body)?;

    Ok(response.result)
}

/// Parses a GetTournamentPrizePool body.
pub fn tournament_prize_pool(body: &[u8]) -> Result<TournamentPrizePool, Error> {
    let response: GetTournamentPrizePoolResponse = serde_json::from_slice(body)?;

    Ok(response.result)
}
