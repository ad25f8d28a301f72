//! Typed models for the Dota 2 Steam Web API.
//!
//! Responses are parsed into immutable models: [`response::Match`], [`response::MatchHistory`],
//! [`response::Heroes`], [`response::GameItems`] and [`response::TournamentPrizePool`]. A
//! failing response status is returned as an [`APIError`]. A match ID the API does not know is
//! not an error; the returned match has its `error` flag set.
//!
//! ```no_run
//! # async fn run() -> Result<(), dota_webapi::Error> {
//! let api = dota_webapi::DotaAPI::builder("API_KEY").build();
//! let details = api.get_match_details(4176987886).await?;
//!
//! if !details.error {
//!     for player in details.players_minimal() {
//!         println!("{:?} played hero {}", player.account, player.hero.id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod payload;
mod serialize;
pub mod api;
pub mod enums;
pub mod error;
pub mod request;
pub mod response;
pub mod types;

pub use api::{DotaAPI, DotaAPIBuilder, Endpoint, HttpTransport, RawResponse, Transport};
pub use error::{APIError, Error};
pub use payload::Payload;
pub use steamid_ng::SteamID;
