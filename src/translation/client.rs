use reqwest::{Client, StatusCode, header};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// A single text to translate between two language codes.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub source_language: String,
    pub target_language: String,
    pub text: String,
}

/// Errors returned by [`TranslationClient::translate`].
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The request never produced an HTTP response.
    ///
    /// reqwest's message already names the URL.
    #[error("request failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status.
    #[error("API request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The body was not the JSON shape we expect.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// `translated_text` was absent, null or empty.
    #[error("response contained no translated text")]
    Empty,
}

impl TranslateError {
    /// Returns `true` when the service responded but the body was unusable.
    pub const fn is_response_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Empty)
    }
}

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    source_language: &'a str,
    target_language: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    output: Output,
}

#[derive(Debug, Deserialize)]
struct Output {
    data: OutputData,
}

#[derive(Debug, Deserialize)]
struct OutputData {
    translated_text: Option<String>,
}

pub struct TranslationClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl TranslationClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one translation request and returns the translated text.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let body = TranslateBody {
            source_language: &request.source_language,
            target_language: &request.target_language,
            text: &request.text,
        };

        debug!(
            endpoint = %self.endpoint,
            source = %request.source_language,
            target = %request.target_language,
            chars = request.text.chars().count(),
            "sending translation request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|source| TranslateError::Request {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| TranslateError::Request {
                url: self.endpoint.clone(),
                source,
            })?;

        debug!(%status, bytes = text.len(), "received translation response");

        if !status.is_success() {
            return Err(TranslateError::Status { status, body: text });
        }

        parse_translated_text(&text)
    }
}

fn parse_translated_text(body: &str) -> Result<String, TranslateError> {
    let response: TranslateResponse = serde_json::from_str(body)?;

    match response.output.data.translated_text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(TranslateError::Empty),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_request() -> TranslationRequest {
        TranslationRequest {
            source_language: "eng".to_string(),
            target_language: "lug".to_string(),
            text: "Good morning".to_string(),
        }
    }

    fn client_for(server: &MockServer) -> TranslationClient {
        TranslationClient::new(
            format!("{}/tasks/nllb_translate", server.uri()),
            "secret-token".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_translated_text() {
        let body = r#"{"output": {"data": {"translated_text": "Wasuze otya nno"}}}"#;
        assert_eq!(parse_translated_text(body).unwrap(), "Wasuze otya nno");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"{"output": {"id": "x", "data": {"translated_text": "ok", "extra": 1}}, "status": "done"}"#;
        assert_eq!(parse_translated_text(body).unwrap(), "ok");
    }

    #[test]
    fn test_parse_missing_output_is_parse_error() {
        let err = parse_translated_text(r#"{"detail": "nope"}"#).unwrap_err();
        assert!(matches!(err, TranslateError::Parse(_)));
        assert!(err.to_string().contains("output"));
    }

    #[test]
    fn test_parse_missing_data_is_parse_error() {
        let err = parse_translated_text(r#"{"output": {}}"#).unwrap_err();
        assert!(matches!(err, TranslateError::Parse(_)));
    }

    #[test]
    fn test_parse_missing_or_null_text_is_empty() {
        let missing = parse_translated_text(r#"{"output": {"data": {}}}"#).unwrap_err();
        assert!(matches!(missing, TranslateError::Empty));

        let null =
            parse_translated_text(r#"{"output": {"data": {"translated_text": null}}}"#).unwrap_err();
        assert!(matches!(null, TranslateError::Empty));

        let empty =
            parse_translated_text(r#"{"output": {"data": {"translated_text": ""}}}"#).unwrap_err();
        assert!(matches!(empty, TranslateError::Empty));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_translated_text("<html>bad gateway</html>").unwrap_err();
        assert!(err.is_response_error());
    }

    #[tokio::test]
    async fn test_translate_sends_expected_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tasks/nllb_translate"))
            .and(header("authorization", "Bearer secret-token"))
            .and(header("accept", "application/json"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "source_language": "eng",
                "target_language": "lug",
                "text": "Good morning",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": {"data": {"translated_text": "Wasuze otya nno"}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let translated = client_for(&server)
            .translate(&sample_request())
            .await
            .unwrap();

        assert_eq!(translated, "Wasuze otya nno");
    }

    #[tokio::test]
    async fn test_translate_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .translate(&sample_request())
            .await
            .unwrap_err();

        match err {
            TranslateError::Status { status, body } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(body, "invalid token");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_translate_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"output": "pending"})))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .translate(&sample_request())
            .await
            .unwrap_err();

        assert!(err.is_response_error());
    }

    #[tokio::test]
    async fn test_translate_connection_refused() {
        let server = MockServer::start().await;
        let endpoint = format!("{}/tasks/nllb_translate", server.uri());
        drop(server);

        let client =
            TranslationClient::new(endpoint, "t".to_string(), Duration::from_secs(2)).unwrap();
        let err = client.translate(&sample_request()).await.unwrap_err();

        assert!(matches!(err, TranslateError::Request { .. }));
        assert!(!err.is_response_error());
        assert!(err.to_string().starts_with("request failed"));
        assert!(err.to_string().matches(client.endpoint()).count() <= 1);
    }
}
