use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The game mode of a match.
#[derive(Debug, Serialize, Deserialize, Display, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive, Clone, Copy)]
#[serde(from = "u8", into = "u8")]
#[repr(u8)]
pub enum GameMode {
    NotSet = 0,
    AllPick = 1,
    CaptainsMode = 2,
    RandomDraft = 3,
    SingleDraft = 4,
    AllRandom = 5,
    Intro = 6,
    Diretide = 7,
    ReverseCaptainsMode = 8,
    Greeviling = 9,
    Tutorial = 10,
    MidOnly = 11,
    LeastPlayed = 12,
    LimitedHeroes = 13,
    CompendiumMatchmaking = 14,
    Custom = 15,
    CaptainsDraft = 16,
    BalancedDraft = 17,
    AbilityDraft = 18,
    Event = 19,
    AllRandomDeathmatch = 20,
    Solo1v1Mid = 21,
    AllDraft = 22,
    Turbo = 23,
    Mutation = 24,
    CoachesChallenge = 25,
    /// A mode added after this list was written.
    #[num_enum(catch_all)]
    Unknown(u8),
}
