use std::fmt;
use serde::{Deserialize, Serialize};
use steamid_ng::SteamID;

/// The offset between a 32-bit account ID and its 64-bit Steam ID.
pub const STEAMID64_OFFSET: u64 = 76561197960265728;
/// The account ID the API reports for players who hide their profile.
pub const ANONYMOUS_ACCOUNT_ID: u64 = 4294967295;

/// A Steam account, stored as its 64-bit Steam ID.
///
/// Both 32-bit account IDs and 64-bit Steam IDs are accepted and normalize to the same value.
///
/// ```
/// use dota_webapi::response::SteamAccount;
///
/// assert_eq!(SteamAccount::new(123456), SteamAccount::new(76561197960389184));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct SteamAccount(u64);

impl SteamAccount {
    /// Creates a [`SteamAccount`] from either a 32-bit account ID or a 64-bit Steam ID.
    pub fn new(id: u64) -> Self {
        if id <= u64::from(u32::MAX) {
            Self(id + STEAMID64_OFFSET)
        } else {
            Self(id)
        }
    }

    /// Creates a [`SteamAccount`] for a player in match data. Returns `None` for anonymous
    /// players.
    pub fn from_player_account_id(account_id: Option<u64>) -> Option<Self> {
        account_id
            .filter(|account_id| *account_id != ANONYMOUS_ACCOUNT_ID)
            .map(Self::new)
    }

    /// The 64-bit Steam ID.
    pub fn steamid64(&self) -> u64 {
        self.0
    }

    /// The 32-bit account ID.
    pub fn account_id(&self) -> u32 {
        self.steamid().account_id()
    }

    /// Converts this account into a [`SteamID`].
    pub fn steamid(&self) -> SteamID {
        SteamID::from(self.0)
    }
}

impl From<u64> for SteamAccount {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<u32> for SteamAccount {
    fn from(account_id: u32) -> Self {
        Self::new(u64::from(account_id))
    }
}

impl From<SteamID> for SteamAccount {
    fn from(steamid: SteamID) -> Self {
        Self::new(u64::from(steamid))
    }
}

impl From<SteamAccount> for u64 {
    fn from(account: SteamAccount) -> Self {
        account.0
    }
}

impl fmt::Display for SteamAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn normalizes_32_bit_ids() {
        let steam32 = 123456;
        let steam64 = STEAMID64_OFFSET + steam32;

        assert_eq!(SteamAccount::new(steam32), SteamAccount::new(steam64));
        assert_eq!(SteamAccount::new(steam32).steamid64(), steam64);
    }

    #[test]
    fn normalizes_across_the_32_bit_range() {
        for steam32 in [0, 1, 30633942, 114539087, u64::from(u32::MAX)] {
            assert_eq!(
                SteamAccount::new(steam32),
                SteamAccount::new(steam32 + STEAMID64_OFFSET),
            );
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let account = SteamAccount::new(76561198080179568);
        let renormalized = SteamAccount::new(account.steamid64());

        assert_eq!(account, renormalized);
        assert_eq!(renormalized.steamid64(), 76561198080179568);
    }

    #[test]
    fn hashes_on_canonical_id() {
        let accounts = [SteamAccount::from(30633942u32), SteamAccount::new(76561197990899670)]
            .into_iter()
            .collect::<HashSet<_>>();

        assert_eq!(accounts.len(), 1);
    }

    #[test]
    fn converts_to_steamid() {
        let account = SteamAccount::new(76561198000000000);

        assert_eq!(account.account_id(), 39734272);
        assert_eq!(SteamAccount::from(account.steamid()), account);
    }

    #[test]
    fn anonymous_players_have_no_account() {
        assert_eq!(SteamAccount::from_player_account_id(Some(ANONYMOUS_ACCOUNT_ID)), None);
        assert_eq!(SteamAccount::from_player_account_id(None), None);
        assert_eq!(
            SteamAccount::from_player_account_id(Some(59769890)),
            Some(SteamAccount::new(59769890)),
        );
    }
}
