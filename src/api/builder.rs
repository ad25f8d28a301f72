use super::{DotaAPI, HttpTransport};
use super::transport::{get_default_middleware, DEFAULT_TIMEOUT, USER_AGENT_STRING};
use crate::enums::Language;
use std::time::Duration;
use reqwest_middleware::ClientWithMiddleware;

/// Builder for constructing a [`DotaAPI`] which sends requests over HTTP.
///
/// An API key from <https://steamcommunity.com/dev/apikey> is required. Reading it from the
/// environment or a file is left to the caller.
#[derive(Debug, Clone)]
pub struct DotaAPIBuilder {
    /// Your account's API key.
    pub(crate) api_key: String,
    /// The language for localized names in metadata responses.
    pub(crate) language: Language,
    /// Client to use for requests.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// User agent for requests. Not used when a client is supplied.
    pub(crate) user_agent: String,
    /// Request timeout. Not used when a client is supplied.
    pub(crate) timeout: Duration,
}

impl DotaAPIBuilder {
    /// Creates a new [`DotaAPIBuilder`].
    pub fn new<T>(api_key: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            api_key: api_key.into(),
            language: Language::default(),
            client: None,
            user_agent: USER_AGENT_STRING.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// The language for localized names in metadata responses. Defaults to English.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Client to use for requests.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.client = Some(client);
        self
    }

    /// User agent for requests.
    pub fn user_agent<T>(mut self, user_agent: T) -> Self
    where
        T: Into<String>,
    {
        self.user_agent = user_agent.into();
        self
    }

    /// Request timeout. Defaults to 60 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the [`DotaAPI`].
    pub fn build(self) -> DotaAPI {
        self.into()
    }
}

impl From<DotaAPIBuilder> for DotaAPI {
    fn from(builder: DotaAPIBuilder) -> Self {
        let client = builder.client
            .unwrap_or_else(|| get_default_middleware(&builder.user_agent, builder.timeout));

        DotaAPI::with_transport(HttpTransport::new(client), builder.api_key)
            .language(builder.language)
    }
}
