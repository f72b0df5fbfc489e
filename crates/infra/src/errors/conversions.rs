//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};
use std::string::FromUtf8Error;

use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use suggest_domain::SuggestError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SuggestError);

impl From<InfraError> for SuggestError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SuggestError> for InfraError {
    fn from(value: SuggestError) -> Self {
        InfraError(value)
    }
}

impl InfraError {
    /// Fetch failure for a filesystem read of `identifier`.
    pub fn io(identifier: &str, err: &IoError) -> Self {
        let message = match err.kind() {
            ErrorKind::NotFound => "file not found".to_string(),
            ErrorKind::PermissionDenied => "permission denied".to_string(),
            _ => err.to_string(),
        };
        InfraError(SuggestError::fetch(identifier, message))
    }

    /// Parse failure for a payload of `identifier` that is not UTF-8.
    pub fn utf8(identifier: &str, err: &FromUtf8Error) -> Self {
        InfraError(SuggestError::parse(identifier, format!("payload is not valid UTF-8: {err}")))
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSuggestError {
    fn into_suggest(self) -> SuggestError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SuggestError */
/* -------------------------------------------------------------------------- */

impl IntoSuggestError for HttpError {
    fn into_suggest(self) -> SuggestError {
        let identifier = self.url().map_or_else(|| "<unknown>".to_string(), ToString::to_string);

        if self.is_timeout() {
            return SuggestError::fetch(identifier, "HTTP request timed out");
        }

        if self.is_connect() {
            return SuggestError::fetch(identifier, "HTTP connection failure");
        }

        if let Some(status) = self.status() {
            let message = format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            );
            return SuggestError::fetch(identifier, message);
        }

        if self.is_decode() || self.is_body() {
            return SuggestError::fetch(identifier, format!("failed to read response body: {self}"));
        }

        SuggestError::fetch(identifier, self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_suggest())
    }
}

/* -------------------------------------------------------------------------- */
/* configuration formats → SuggestError */
/* -------------------------------------------------------------------------- */

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(SuggestError::Config(format!("Invalid JSON format: {value}")))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(SuggestError::Config(format!("Invalid TOML format: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn missing_file_maps_to_fetch_error() {
        let err = IoError::new(ErrorKind::NotFound, "No such file or directory");
        let mapped: SuggestError = InfraError::io("dataset/tz.json", &err).into();

        match mapped {
            SuggestError::Fetch { identifier, message } => {
                assert_eq!(identifier, "dataset/tz.json");
                assert_eq!(message, "file not found");
            }
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8_maps_to_parse_error() {
        let err = String::from_utf8(vec![b'[', 0xff, b']']).unwrap_err();
        let mapped: SuggestError = InfraError::utf8("dataset/tz.json", &err).into();

        match mapped {
            SuggestError::Parse { identifier, message } => {
                assert_eq!(identifier, "dataset/tz.json");
                assert!(message.contains("UTF-8"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_toml_maps_to_config_error() {
        let err = toml::from_str::<toml::Table>("source = [").unwrap_err();
        let mapped: SuggestError = InfraError::from(err).into();
        assert!(matches!(mapped, SuggestError::Config(msg) if msg.contains("TOML")));
    }

    #[test]
    fn invalid_json_maps_to_config_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let mapped: SuggestError = InfraError::from(err).into();
        assert!(matches!(mapped, SuggestError::Config(msg) if msg.contains("JSON")));
    }

    #[tokio::test]
    async fn http_status_error_keeps_url_and_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::SERVICE_UNAVAILABLE))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let url = format!("{}/tz.json", server.uri());
        let error = client.get(&url).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: SuggestError = InfraError::from(error).into();
        match mapped {
            SuggestError::Fetch { identifier, message } => {
                assert_eq!(identifier, url);
                assert!(message.contains("503"));
            }
            other => panic!("expected fetch error, got {:?}", other),
        }
    }
}
