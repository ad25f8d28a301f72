use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The kind of lobby a match was played in.
#[derive(Debug, Serialize, Deserialize, Display, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive, Clone, Copy)]
#[serde(from = "i8", into = "i8")]
#[repr(i8)]
pub enum LobbyType {
    Invalid = -1,
    PublicMatchmaking = 0,
    Practice = 1,
    Tournament = 2,
    Tutorial = 3,
    CoopWithBots = 4,
    TeamMatch = 5,
    SoloQueue = 6,
    Ranked = 7,
    Solo1v1Mid = 8,
    BattleCup = 9,
    #[num_enum(catch_all)]
    Unknown(i8),
}
