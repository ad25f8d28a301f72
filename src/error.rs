//! Error types.

use crate::api::Endpoint;
use crate::types::Parameters;
use reqwest::StatusCode;

/// Any error that can occur while making a request or reading its response.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API responded with a status that indicates failure.
    #[error("{}", .0)]
    Api(#[from] APIError),
    #[error("Invalid parameter: {}", .0)]
    Parameter(#[from] ParameterError),
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    #[error("{}", .0)]
    Field(#[from] FieldError),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

/// A failure reported by the API through the response status.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum APIError {
    /// The API key was rejected.
    #[error("The supplied API key was rejected")]
    Authentication {
        /// The API key used for the request.
        api_key: String,
    },
    /// The method does not exist or has been discontinued.
    #[error("Method {} is unavailable", .endpoint)]
    MethodUnavailable {
        endpoint: Endpoint,
    },
    /// The service is unavailable, usually because it timed out.
    #[error("The service is unavailable")]
    Timeout,
    /// A required argument was missing or malformed.
    #[error("Insufficient arguments for {}: {:?}", .endpoint, .arguments)]
    InsufficientArguments {
        endpoint: Endpoint,
        /// The arguments supplied for the request, excluding the API key.
        arguments: Parameters,
    },
    /// Any other failing status.
    #[error("{} {}", .status, .reason)]
    Generic {
        status: u16,
        reason: String,
    },
}

impl APIError {
    /// Maps a response status to an error. Returns `None` for successful statuses.
    pub fn from_status(
        status: StatusCode,
        context: &RequestContext<'_>,
    ) -> Option<Self> {
        if status.is_success() {
            return None;
        }

        let error = match status {
            StatusCode::UNAUTHORIZED |
            StatusCode::FORBIDDEN => Self::Authentication {
                api_key: context.api_key.to_owned(),
            },
            StatusCode::NOT_FOUND => Self::MethodUnavailable {
                endpoint: context.endpoint,
            },
            StatusCode::SERVICE_UNAVAILABLE => Self::Timeout,
            StatusCode::BAD_REQUEST => Self::InsufficientArguments {
                endpoint: context.endpoint,
                arguments: context.arguments.clone(),
            },
            other => Self::Generic {
                status: other.as_u16(),
                reason: other.canonical_reason().unwrap_or("Unknown").to_owned(),
            },
        };

        Some(error)
    }
}

/// What was requested, used to describe a failing status.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub endpoint: Endpoint,
    pub api_key: &'a str,
    pub arguments: &'a Parameters,
}

/// A field could not be read from a response object.
#[derive(thiserror::Error, Debug)]
pub enum FieldError {
    #[error("Missing field `{}`", .0)]
    Missing(String),
    #[error("Invalid value for field `{}`: {}", .field, .error)]
    Invalid {
        field: String,
        error: serde_json::Error,
    },
    #[error("Expected an object")]
    NotAnObject,
}

/// Request parameters could not be encoded.
#[derive(thiserror::Error, Debug)]
pub enum ParameterError {
    #[error("{}", .0)]
    UrlParse(#[from] url::ParseError),
    #[error("Unable to convert to query parameters: {}", .0)]
    Serialize(serde_json::Error),
    #[error("Expected parameters to serialize as an object")]
    NotAnObject,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(status: u16, arguments: &Parameters) -> Option<APIError> {
        let context = RequestContext {
            endpoint: Endpoint::GetMatchDetails,
            api_key: "0000",
            arguments,
        };

        APIError::from_status(StatusCode::from_u16(status).unwrap(), &context)
    }

    #[test]
    fn successful_statuses_pass_through() {
        let arguments = Parameters::new();

        assert_eq!(map(200, &arguments), None);
        assert_eq!(map(204, &arguments), None);
    }

    #[test]
    fn maps_rejected_key() {
        let arguments = Parameters::new();

        assert_eq!(map(403, &arguments), Some(APIError::Authentication {
            api_key: "0000".into(),
        }));
        assert!(matches!(map(401, &arguments), Some(APIError::Authentication { .. })));
    }

    #[test]
    fn maps_missing_method() {
        assert_eq!(map(404, &Parameters::new()), Some(APIError::MethodUnavailable {
            endpoint: Endpoint::GetMatchDetails,
        }));
    }

    #[test]
    fn maps_unavailable_service() {
        assert_eq!(map(503, &Parameters::new()), Some(APIError::Timeout));
    }

    #[test]
    fn maps_bad_request_with_arguments() {
        let mut arguments = Parameters::new();

        arguments.insert("matches_requested".into(), "five".into());

        assert_eq!(map(400, &arguments), Some(APIError::InsufficientArguments {
            endpoint: Endpoint::GetMatchDetails,
            arguments: arguments.clone(),
        }));
    }

    #[test]
    fn maps_everything_else_to_generic() {
        let arguments = Parameters::new();

        assert_eq!(map(500, &arguments), Some(APIError::Generic {
            status: 500,
            reason: "Internal Server Error".into(),
        }));
        assert_eq!(map(429, &arguments), Some(APIError::Generic {
            status: 429,
            reason: "Too Many Requests".into(),
        }));
        assert!(matches!(map(302, &arguments), Some(APIError::Generic { status: 302, .. })));

        for status in 100..1000 {
            let mapped = map(status, &arguments);

            assert_eq!(mapped.is_none(), (200..300).contains(&status));
        }
    }
}
