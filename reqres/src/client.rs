use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::domain::{ReqresSingleResponse, ReqresUser};

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Error, Debug)]
pub enum ReqresError {
    #[error("NotFound: {0}")]
    NotFound(String),
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("InvalidUrl: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone)]
pub struct ReqresClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl ReqresClient {
    /// Create a client for the API rooted at `base_url`, e.g. `https://reqres.in/api`.
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, ReqresError> {
        let base_url = Url::parse(base_url.as_ref())
            .map_err(|e| ReqresError::InvalidUrl(format!("{}: {}", base_url.as_ref(), e)))?;

        if base_url.cannot_be_a_base() {
            return Err(ReqresError::InvalidUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReqresError::ResponseError(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key: None,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn user_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(id);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, ReqresError> {
        let mut request = self.http.get(url.clone());
        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| ReqresError::ResponseError(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ReqresError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            return Err(ReqresError::ResponseError(format!(
                "unexpected status {} from {}",
                status, url
            )));
        }

        resp.json::<T>().await.map_err(|e| {
            ReqresError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    pub async fn fetch_user(&self, id: &str) -> Result<ReqresUser, ReqresError> {
        let url = self.user_url(id);
        tracing::debug!("fetching reqres user from {}", url);

        let response: ReqresSingleResponse<ReqresUser> = self.fetch(url).await?;
        Ok(response.data)
    }
}
