//! Types for common values in Dota 2 responses.

use std::collections::BTreeMap;
use chrono::{DateTime, Utc};

/// Uniquely identifies a match.
pub type MatchId = u64;
/// The order in which a match was recorded by the match servers.
pub type MatchSeqNum = u64;
/// Stable numeric identifier of a hero e.g. 59 for Huskar.
pub type HeroId = u32;
/// Stable numeric identifier of an item e.g. 44 for Tango.
pub type ItemId = u32;
/// The ID of a league (tournament).
pub type LeagueId = u32;
/// The ID of a professional team.
pub type TeamId = u64;
/// Query arguments sent with a request, ordered by name.
pub type Parameters = BTreeMap<String, String>;
/// A time reported by the match servers.
pub type ServerTime = DateTime<Utc>;
