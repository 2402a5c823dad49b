//! HTTP client for the storefront services.

use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Fallback when a failure body carries no usable message.
const GENERIC_ERROR: &str = "el servicio no está disponible, intente de nuevo";

/// Configuration for reaching the storefront API gateway.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, e.g. `"https://api.tienda.example"`.
    pub base_url: String,
}

/// Errors produced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or serialization failure below the HTTP status line.
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status. The message is
    /// the server's own, surfaced verbatim when one could be extracted.
    #[error("{message}")]
    Remote {
        /// HTTP status returned by the service.
        status: StatusCode,

        /// Server-provided message, or a generic fallback.
        message: String,
    },
}

/// Thin JSON client over the storefront's REST services.
///
/// Session credentials travel implicitly: the underlying client keeps a
/// cookie store, mirroring the browser environment the flow was
/// designed for. Responses are normalized into typed values or an
/// [`ApiError`]; failed calls are never retried automatically.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Create a client for the given gateway.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be
    /// built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder().cookie_store(true).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            http,
        })
    }

    /// GET `path` and decode the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.http.get(self.url(path)).send().await?;

        Self::decode(response).await
    }

    /// POST `body` as JSON to `path` and decode the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.http.post(self.url(path)).json(body).send().await?;

        Self::decode(response).await
    }

    /// PUT `body` as JSON to `path`, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + Sync,
    {
        let response = self.http.put(self.url(path)).json(body).send().await?;

        Self::check(response).await
    }

    /// DELETE `path`, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.http.delete(self.url(path)).send().await?;

        Self::check(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn decode<T>(response: reqwest::Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }

        Ok(response.json().await?)
    }

    async fn check(response: reqwest::Response) -> Result<(), ApiError> {
        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }

        Ok(())
    }

    async fn remote_error(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        ApiError::Remote {
            status,
            message: extract_message(&body),
        }
    }
}

/// Pull a human-readable message out of a failure body.
///
/// The services disagree on the field name: `error`, `message` and
/// `mensaje` are all in use. Non-JSON bodies fall back to a generic
/// localized message.
fn extract_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body) else {
        return GENERIC_ERROR.to_owned();
    };

    ["error", "message", "mensaje"]
        .iter()
        .find_map(|key| parsed.get(key).and_then(serde_json::Value::as_str))
        .map_or_else(|| GENERIC_ERROR.to_owned(), str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_field() {
        assert_eq!(
            extract_message(r#"{"error": "carrito no encontrado"}"#),
            "carrito no encontrado"
        );
    }

    #[test]
    fn extracts_alternate_field_names() {
        assert_eq!(extract_message(r#"{"message": "sin stock"}"#), "sin stock");
        assert_eq!(
            extract_message(r#"{"mensaje": "zona no cubierta"}"#),
            "zona no cubierta"
        );
    }

    #[test]
    fn prefers_error_over_message() {
        assert_eq!(
            extract_message(r#"{"message": "b", "error": "a"}"#),
            "a"
        );
    }

    #[test]
    fn falls_back_on_non_json_bodies() {
        assert_eq!(extract_message("<html>502</html>"), GENERIC_ERROR);
        assert_eq!(extract_message(""), GENERIC_ERROR);
        assert_eq!(extract_message(r#"{"detail": 42}"#), GENERIC_ERROR);
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:3000/".to_owned(),
        })
        .expect("client should build");

        assert_eq!(client.url("/cart/7"), "http://localhost:3000/cart/7");
    }
}
