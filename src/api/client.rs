//! HTTP client for the Shipyard REST API.
//!
//! One shared `reqwest` client with the bearer token attached as a default
//! header. Each helper performs exactly one round trip: no retries, no
//! caching, no redirect games beyond reqwest's defaults. A bounded per-call
//! timeout stands in for a retry layer.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use crate::core::config::CredentialsConfig;

/// Per-call timeout. There is no retry layer above this client, so a hung
/// upstream call must fail on its own within this bound.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Error body shape the upstream sends on non-2xx responses.
#[derive(serde::Deserialize)]
struct UpstreamErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the Shipyard API.
///
/// Stateless apart from the credential baked into its default headers;
/// safe to share across concurrent tool invocations.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the credentials section of the config.
    ///
    /// Fails fast with [`ApiError::MissingCredentials`] when no API key is
    /// configured. Callers use that to skip tool registration entirely
    /// rather than exposing tools that would fail on every invocation.
    pub fn new(credentials: &CredentialsConfig) -> ApiResult<Self> {
        let api_key = credentials
            .api_key
            .as_deref()
            .ok_or(ApiError::MissingCredentials)?;

        let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| ApiError::InvalidBaseUrl(format!("invalid API key value: {e}")))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: credentials.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Join a relative path (e.g. `servers/12/sites`) onto the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.decode(resp).await
    }

    /// GET returning the body as untyped JSON.
    ///
    /// For endpoints without a dedicated response shape; spares call sites
    /// from declaring a one-off type.
    pub(crate) async fn get_raw(&self, path: &str) -> ApiResult<Value> {
        self.get(path).await
    }

    /// GET returning the body as plain text (e.g. deployment scripts).
    pub(crate) async fn get_text(&self, path: &str) -> ApiResult<String> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(resp.text().await?)
        } else {
            Err(self.decode_error(status, resp).await)
        }
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.decode(resp).await
    }

    /// POST with a body, discarding any response payload.
    pub(crate) async fn post_empty<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.expect_success(resp).await
    }

    /// Bodyless POST for side-effect endpoints (reboot, restart, deploy).
    pub(crate) async fn action(&self, path: &str) -> ApiResult<()> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).send().await?;
        self.expect_success(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.url(path);
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.decode(resp).await
    }

    /// PUT with a body, discarding any response payload.
    pub(crate) async fn put_empty<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        let url = self.url(path);
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.expect_success(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.expect_success(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn decode<T: DeserializeOwned>(&self, resp: reqwest::Response) -> ApiResult<T> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                ApiError::Decode {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.decode_error(status, resp).await)
        }
    }

    async fn expect_success(&self, resp: reqwest::Response) -> ApiResult<()> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.decode_error(status, resp).await)
        }
    }

    async fn decode_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> ApiError {
        let raw = resp.text().await.unwrap_or_default();

        let message = serde_json::from_str::<UpstreamErrorBody>(&raw)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| if raw.is_empty() { status.to_string() } else { raw });

        ApiError::upstream(status.as_u16(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(url: &str) -> ApiClient {
        ApiClient::new(&CredentialsConfig {
            api_key: Some("test-token".to_string()),
            api_url: url.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_missing_key_fails_construction() {
        let result = ApiClient::new(&CredentialsConfig {
            api_key: None,
            api_url: "https://api.shipyard.dev/v1".to_string(),
        });
        assert!(matches!(result, Err(ApiError::MissingCredentials)));
    }

    #[test]
    fn test_url_joining_handles_slashes() {
        let client = client_for("https://api.shipyard.dev/v1/");
        assert_eq!(
            client.url("/servers/1/sites"),
            "https://api.shipyard.dev/v1/servers/1/sites"
        );
        assert_eq!(client.url("recipes"), "https://api.shipyard.dev/v1/recipes");
    }
}
