//! Cloud store speaking to the persistence REST API.
//!
//! - `GET  {base}/api/v1/progress/{user_key}` → `CloudRecord` (404 = absent)
//! - `PUT  {base}/api/v1/progress/{user_key}` ← `CloudProgress`

use crate::{CloudStore, SyncError, SyncResult};

use ps_config::CloudConfig;
use ps_core::{CloudProgress, CloudRecord};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url};
use serde_json::Value;

const PROGRESS_PATH: [&str; 3] = ["api", "v1", "progress"];

pub struct HttpCloudStore {
    base_url: Url,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl HttpCloudStore {
    /// Create a new store
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://127.0.0.1:8000"). Only `http`
    ///   is accepted; no TLS backend is compiled in.
    /// * `api_key` - Optional bearer token
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Duration) -> SyncResult<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| SyncError::invalid_url(base_url, e.to_string()))?;

        if base_url.scheme() != "http" {
            return Err(SyncError::invalid_url(
                base_url.as_str(),
                format!(
                    "scheme '{}' is not supported, only http:// (no TLS)",
                    base_url.scheme()
                ),
            ));
        }

        if base_url.cannot_be_a_base() {
            return Err(SyncError::invalid_url(
                base_url.as_str(),
                "URL cannot be used as a base",
            ));
        }

        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key: api_key.map(String::from),
            client,
        })
    }

    pub fn from_config(config: &CloudConfig) -> SyncResult<Self> {
        Self::new(
            &config.base_url,
            config.api_key.as_deref(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// URL of one user's record; the key is encoded as a single path segment.
    fn record_url(&self, user_key: &str) -> SyncResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SyncError::invalid_url(self.base_url.as_str(), "not a base URL"))?
            .pop_if_empty()
            .extend(PROGRESS_PATH)
            .push(user_key);
        Ok(url)
    }

    /// Build a request with the optional bearer token
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let req = self.client.request(method, url);

        match self.api_key {
            Some(ref key) => req.bearer_auth(key),
            None => req,
        }
    }

    /// Turn a non-success response into an `Api` error, using the
    /// `{"error": {"code", "message"}}` body when the server sends one.
    async fn api_error(response: reqwest::Response) -> SyncError {
        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        let error = body.get("error");
        let code = error
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| status.to_string());

        SyncError::api(status.as_u16(), code, message)
    }
}

#[async_trait]
impl CloudStore for HttpCloudStore {
    async fn read(&self, user_key: &str) -> SyncResult<Option<CloudRecord>> {
        let url = self.record_url(user_key)?;
        debug!("GET {url}");

        let response = self.request(Method::GET, url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let bytes = response.bytes().await?;
        let record: CloudRecord = serde_json::from_slice(&bytes)?;
        Ok(Some(record))
    }

    async fn write(&self, user_key: &str, progress: &CloudProgress) -> SyncResult<()> {
        let url = self.record_url(user_key)?;
        debug!("PUT {url}");

        let response = self.request(Method::PUT, url).json(progress).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok(())
    }
}
