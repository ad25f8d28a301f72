use std::fmt;
use strum_macros::{EnumIter, IntoStaticStr};

const API_HOSTNAME: &str = "https://api.steampowered.com";
const MATCH_INTERFACE: &str = "IDOTA2Match_570";
const ECON_INTERFACE: &str = "IEconDOTA2_570";

/// A Web API method.
#[derive(Debug, IntoStaticStr, EnumIter, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Endpoint {
    GetMatchHistory,
    GetMatchHistoryBySequenceNum,
    GetMatchDetails,
    GetHeroes,
    GetGameItems,
    GetTournamentPrizePool,
}

impl Endpoint {
    /// The interface the method belongs to.
    pub fn interface(&self) -> &'static str {
        match self {
            Self::GetMatchHistory |
            Self::GetMatchHistoryBySequenceNum |
            Self::GetMatchDetails => MATCH_INTERFACE,
            Self::GetHeroes |
            Self::GetGameItems |
            Self::GetTournamentPrizePool => ECON_INTERFACE,
        }
    }

    /// The name of the method.
    pub fn method(&self) -> &'static str {
        self.into()
    }

    pub fn version(&self) -> u32 {
        1
    }

    /// The URL for this method.
    pub fn url(&self) -> String {
        format!("{API_HOSTNAME}/{self}")
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/v{}", self.interface(), self.method(), self.version())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn builds_urls() {
        assert_eq!(
            Endpoint::GetMatchDetails.url(),
            "https://api.steampowered.com/IDOTA2Match_570/GetMatchDetails/v1",
        );
        assert_eq!(
            Endpoint::GetHeroes.url(),
            "https://api.steampowered.com/IEconDOTA2_570/GetHeroes/v1",
        );
    }

    #[test]
    fn method_is_the_variant_name() {
        for endpoint in Endpoint::iter() {
            assert_eq!(endpoint.method(), format!("{endpoint:?}"));
        }
    }
}
