use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::domain::{ports::outbound::AvatarFetcher, AvatarError};

pub const DEFAULT_MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;

/// Downloads avatar images over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpAvatarFetcher {
    client: Client,
    max_bytes: u64,
}

impl HttpAvatarFetcher {
    pub fn new(timeout: Duration, max_bytes: u64) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, max_bytes })
    }
}

#[async_trait]
impl AvatarFetcher for HttpAvatarFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, AvatarError> {
        let url = Url::parse(url)
            .map_err(|e| AvatarError::upstream(format!("invalid avatar url '{url}': {e}")))?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AvatarError::upstream(format!("failed to download {url}: {e}")))?;

        if let Some(length) = response.content_length() {
            if length > self.max_bytes {
                return Err(AvatarError::upstream(format!(
                    "avatar at {url} is {length} bytes, limit is {}",
                    self.max_bytes
                )));
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AvatarError::upstream(format!("failed to read {url}: {e}")))?;

        if bytes.len() as u64 > self.max_bytes {
            return Err(AvatarError::upstream(format!(
                "avatar at {url} exceeds {} bytes",
                self.max_bytes
            )));
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    async fn serve() -> String {
        let router = Router::new()
            .route("/img/a.png", get(|| async { vec![1u8, 2, 3, 4] }))
            .route("/img/large.png", get(|| async { vec![0u8; 64] }))
            .route(
                "/img/missing.png",
                get(|| async { StatusCode::NOT_FOUND }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}")
    }

    fn fetcher(max_bytes: u64) -> HttpAvatarFetcher {
        HttpAvatarFetcher::new(Duration::from_secs(5), max_bytes).unwrap()
    }

    #[tokio::test]
    async fn fetch_returns_body_bytes() {
        let base = serve().await;
        let bytes = fetcher(DEFAULT_MAX_AVATAR_BYTES)
            .fetch(&format!("{base}/img/a.png"))
            .await
            .unwrap();
        assert_eq!(bytes.as_ref(), &[1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn error_status_is_upstream_error() {
        let base = serve().await;
        let err = fetcher(DEFAULT_MAX_AVATAR_BYTES)
            .fetch(&format!("{base}/img/missing.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, AvatarError::Upstream(_)));
    }

    #[tokio::test]
    async fn oversized_avatar_is_rejected() {
        let base = serve().await;
        let err = fetcher(16)
            .fetch(&format!("{base}/img/large.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, AvatarError::Upstream(_)));
    }

    #[tokio::test]
    async fn invalid_url_is_rejected_before_sending() {
        let err = fetcher(DEFAULT_MAX_AVATAR_BYTES)
            .fetch("not a url")
            .await
            .unwrap_err();
        assert!(matches!(err, AvatarError::Upstream(_)));
    }
}
