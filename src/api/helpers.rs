use super::RawResponse;
use crate::error::{APIError, Error, ParameterError, RequestContext};
use crate::types::Parameters;
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

/// Checks the status of a response, passing the body through on success.
pub fn check_response(
    response: RawResponse,
    context: &RequestContext<'_>,
) -> Result<Bytes, Error> {
    match APIError::from_status(response.status, context) {
        Some(error) => {
            log::warn!("{} responded with {}: {error}", context.endpoint, response.status);
            Err(error.into())
        },
        None => Ok(response.body),
    }
}

/// Converts request options into query parameters. `None` values are expected to be skipped
/// during serialization.
pub fn to_parameters<T>(options: &T) -> Result<Parameters, ParameterError>
where
    T: Serialize,
{
    match serde_json::to_value(options).map_err(ParameterError::Serialize)? {
        Value::Object(map) => {
            let parameters = map
                .into_iter()
                .filter(|(_key, value)| !value.is_null())
                .map(|(key, value)| {
                    let value = match value {
                        Value::String(s) => s,
                        Value::Bool(b) => u8::from(b).to_string(),
                        other => other.to_string(),
                    };

                    (key, value)
                })
                .collect();

            Ok(parameters)
        },
        _ => Err(ParameterError::NotAnObject),
    }
}
