//! The client and the pieces it sends requests with.

mod builder;
mod endpoint;
mod helpers;
mod raw;
mod response_wrappers;
mod transport;
pub mod parse;

pub use builder::DotaAPIBuilder;
pub use endpoint::Endpoint;
pub use transport::{get_default_middleware, HttpTransport, RawResponse, Transport};

use helpers::{check_response, to_parameters};
use crate::enums::Language;
use crate::error::{Error, RequestContext};
use crate::request::{GetMatchHistoryBySequenceNumOptions, GetMatchHistoryOptions};
use crate::response::{GameItems, Heroes, Match, MatchHistory, TournamentPrizePool};
use crate::types::{LeagueId, MatchId, Parameters};
use bytes::Bytes;

/// Client for the Dota 2 Web API.
///
/// Every method sends exactly one request. Nothing is cached, retried or paginated.
#[derive(Debug, Clone)]
pub struct DotaAPI<T = HttpTransport> {
    transport: T,
    api_key: String,
    /// The language for localized names in metadata responses.
    pub(crate) language: Language,
}

impl DotaAPI {
    /// Creates a builder for a client which sends requests over HTTP.
    pub fn builder<K>(api_key: K) -> DotaAPIBuilder
    where
        K: Into<String>,
    {
        DotaAPIBuilder::new(api_key)
    }
}

impl<T> DotaAPI<T>
where
    T: Transport,
{
    /// Creates a client sending requests through `transport`.
    pub fn with_transport<K>(transport: T, api_key: K) -> Self
    where
        K: Into<String>,
    {
        Self {
            transport,
            api_key: api_key.into(),
            language: Language::default(),
        }
    }

    /// Sets the language for localized names in metadata responses.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Requests `endpoint` with `arguments` and the API key. Returns the body of a successful
    /// response; any other status is mapped to an [`APIError`](crate::APIError).
    pub async fn api_call(
        &self,
        endpoint: Endpoint,
        arguments: Parameters,
    ) -> Result<Bytes, Error> {
        let mut parameters = arguments.clone();

        parameters.insert("key".into(), self.api_key.clone());

        log::debug!("Requesting {endpoint} with {arguments:?}");

        let response = self.transport.fetch(endpoint, &parameters).await?;

        check_response(response, &RequestContext {
            endpoint,
            api_key: &self.api_key,
            arguments: &arguments,
        })
    }

    /// Gets a page of matches.
    pub async fn get_match_history(
        &self,
        options: &GetMatchHistoryOptions,
    ) -> Result<MatchHistory, Error> {
        let arguments = to_parameters(options)?;
        let body = self.api_call(Endpoint::GetMatchHistory, arguments).await?;

        parse::match_history(&body)
    }

    /// Gets a page of matches in the order they were recorded.
    pub async fn get_match_history_by_sequence_num(
        &self,
        options: &GetMatchHistoryBySequenceNumOptions,
    ) -> Result<MatchHistory, Error> {
        let arguments = to_parameters(options)?;
        let body = self.api_call(Endpoint::GetMatchHistoryBySequenceNum, arguments).await?;

        parse::match_history(&body)
    }

    /// Gets the details of a match.
    ///
    /// An unknown match ID is not an error. The returned [`Match`] has `error` set instead.
    pub async fn get_match_details(
        &self,
        match_id: MatchId,
    ) -> Result<Match, Error> {
        let arguments = Parameters::from([
            ("match_id".to_string(), match_id.to_string()),
        ]);
        let body = self.api_call(Endpoint::GetMatchDetails, arguments).await?;

        parse::match_details(match_id, &body)
    }

    /// Gets all heroes with names in the client's language.
    pub async fn get_heroes(&self) -> Result<Heroes, Error> {
        self.get_heroes_in(self.language).await
    }

    /// Gets all heroes with names in `language`.
    pub async fn get_heroes_in(
        &self,
        language: Language,
    ) -> Result<Heroes, Error> {
        let body = self.api_call(Endpoint::GetHeroes, language_arguments(language)).await?;

        parse::heroes(&body)
    }

    /// Gets all items with names in the client's language.
    pub async fn get_game_items(&self) -> Result<GameItems, Error> {
        self.get_game_items_in(self.language).await
    }

    /// Gets all items with names in `language`.
    pub async fn get_game_items_in(
        &self,
        language: Language,
    ) -> Result<GameItems, Error> {
        let body = self.api_call(Endpoint::GetGameItems, language_arguments(language)).await?;

        parse::game_items(&body)
    }

    /// Gets the prize pool of a league.
    pub async fn get_tournament_prize_pool(
        &self,
        league_id: LeagueId,
    ) -> Result<TournamentPrizePool, Error> {
        let arguments = Parameters::from([
            ("leagueid".to_string(), league_id.to_string()),
        ]);
        let body = self.api_call(Endpoint::GetTournamentPrizePool, arguments).await?;

        parse::tournament_prize_pool(&body)
    }
}

fn language_arguments(language: Language) -> Parameters {
    Parameters::from([
        ("language".to_string(), language.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::APIError;
    use std::sync::Mutex;
    use reqwest::StatusCode;

    /// Responds with a fixed status and body, recording each request.
    struct FixtureTransport {
        status: StatusCode,
        body: &'static str,
        requests: Mutex<Vec<(Endpoint, Parameters)>>,
    }

    impl FixtureTransport {
        fn new(status: StatusCode, body: &'static str) -> Self {
            Self {
                status,
                body,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<(Endpoint, Parameters)> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for FixtureTransport {
        async fn fetch(
            &self,
            endpoint: Endpoint,
            parameters: &Parameters,
        ) -> Result<RawResponse, Error> {
            self.requests.lock().unwrap().push((endpoint, parameters.clone()));

            Ok(RawResponse {
                status: self.status,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    fn api(status: StatusCode, body: &'static str) -> DotaAPI<FixtureTransport> {
        DotaAPI::with_transport(FixtureTransport::new(status, body), "0000")
    }

    #[tokio::test]
    async fn gets_match_details() {
        let api = api(StatusCode::OK, include_str!("fixtures/get_match_details.json"));
        let details = api.get_match_details(4176987886).await.unwrap();
        let requests = api.transport.requests();

        assert_eq!(details.players.len(), 10);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, Endpoint::GetMatchDetails);
        assert_eq!(requests[0].1["match_id"], "4176987886");
        assert_eq!(requests[0].1["key"], "0000");
    }

    #[tokio::test]
    async fn unknown_match_is_not_an_error() {
        let api = api(StatusCode::OK, include_str!("fixtures/get_match_details_invalid.json"));
        let details = api.get_match_details(1).await.unwrap();

        assert!(details.error);
        assert!(details.players.is_empty());
    }

    #[tokio::test]
    async fn rejected_key_is_an_authentication_error() {
        let api = api(StatusCode::FORBIDDEN, "<html><body>Forbidden</body></html>");
        let error = api.get_match_details(4176987886).await.unwrap_err();

        assert!(matches!(
            error,
            Error::Api(APIError::Authentication { api_key }) if api_key == "0000"
        ));
    }

    #[tokio::test]
    async fn bad_request_carries_arguments_without_key() {
        let api = api(StatusCode::BAD_REQUEST, "");
        let error = api.api_call(Endpoint::GetMatchDetails, Parameters::new()).await.unwrap_err();

        match error {
            Error::Api(APIError::InsufficientArguments { endpoint, arguments }) => {
                assert_eq!(endpoint, Endpoint::GetMatchDetails);
                assert!(arguments.is_empty());
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn missing_method_is_unavailable() {
        let api = api(StatusCode::NOT_FOUND, "");
        let error = api.get_tournament_prize_pool(9870).await.unwrap_err();

        assert!(matches!(
            error,
            Error::Api(APIError::MethodUnavailable { endpoint: Endpoint::GetTournamentPrizePool })
        ));
    }

    #[tokio::test]
    async fn requests_heroes_in_language() {
        let api = api(StatusCode::OK, include_str!("fixtures/get_heroes_ru.json"))
            .language(Language::Russian);
        let heroes = api.get_heroes().await.unwrap();
        let requests = api.transport.requests();

        assert_eq!(heroes.get(59).unwrap().localized_name.as_deref(), Some("Хускар"));
        assert_eq!(requests[0].1["language"], "ru_ru");
    }

    #[tokio::test]
    async fn requests_game_items_in_default_language() {
        let api = api(StatusCode::OK, include_str!("fixtures/get_game_items.json"));
        let items = api.get_game_items().await.unwrap();
        let requests = api.transport.requests();

        assert_eq!(items.get(265).unwrap().localized_name.as_deref(), Some("Infused Raindrops"));
        assert_eq!(requests[0].0, Endpoint::GetGameItems);
        assert_eq!(requests[0].1["language"], "en_us");
    }

    #[tokio::test]
    async fn sends_match_history_options() {
        let api = api(StatusCode::OK, include_str!("fixtures/get_match_history.json"));
        let options = GetMatchHistoryOptions {
            hero_id: Some(35),
            matches_requested: Some(2),
            ..GetMatchHistoryOptions::default()
        };
        let history = api.get_match_history(&options).await.unwrap();
        let requests = api.transport.requests();

        assert_eq!(history.matches.len(), 2);
        assert!(history.has_more());
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1["hero_id"], "35");
        assert_eq!(requests[0].1["matches_requested"], "2");
        assert!(!requests[0].1.contains_key("account_id"));
    }

    #[tokio::test]
    async fn gets_match_history_by_sequence_num() {
        let api = api(StatusCode::OK, include_str!("fixtures/get_match_history_by_sequence_num.json"));
        let options = GetMatchHistoryBySequenceNumOptions {
            start_at_match_seq_num: Some(3623433513),
            matches_requested: Some(1),
        };
        let history = api.get_match_history_by_sequence_num(&options).await.unwrap();
        let requests = api.transport.requests();

        assert_eq!(history.matches[0].match_id, 4176987886);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, Endpoint::GetMatchHistoryBySequenceNum);
        assert_eq!(requests[0].1["start_at_match_seq_num"], "3623433513");
    }

    #[tokio::test]
    async fn unexpected_status_is_generic() {
        let api = api(StatusCode::INTERNAL_SERVER_ERROR, "");
        let error = api.get_heroes().await.unwrap_err();

        assert!(matches!(
            error,
            Error::Api(APIError::Generic { status: 500, ref reason }) if reason == "Internal Server Error"
        ));
    }
}
