//! Enumerated types.

mod game_mode;
mod language;
mod lobby_type;
mod team;

pub use game_mode::GameMode;
pub use language::Language;
pub use lobby_type::LobbyType;
pub use team::Team;
