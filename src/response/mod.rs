//! Models for responses.

mod game_items;
mod hero;
mod heroes;
mod item;
mod match_details;
mod match_history;
mod player;
mod steam_account;
mod tournament_prize_pool;

pub use game_items::GameItems;
pub use hero::Hero;
pub use heroes::Heroes;
pub use item::{Item, EMPTY_ITEM_ID};
pub use match_details::Match;
pub use match_history::{MatchHistory, MatchSummary, MATCH_HISTORY_STATUS_OK};
pub use player::{Player, PlayerMinimal, PlayerStats};
pub use steam_account::{SteamAccount, ANONYMOUS_ACCOUNT_ID, STEAMID64_OFFSET};
pub use tournament_prize_pool::TournamentPrizePool;
