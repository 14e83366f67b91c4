//! Common contract for news providers and the HTTP plumbing they share

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use url::Url;

use vtv_core::{Article, NewsQuery};

use crate::error::NewsError;

/// Timeout for every provider call; a timeout counts as a provider failure
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent to providers
pub const USER_AGENT: &str = "VtvNewsApp/1.0";

/// A third-party news search API
///
/// Implementations translate a [`NewsQuery`] into their own request format
/// and map the response into canonical [`Article`]s. A response without a
/// single usable article is reported as [`NewsError::EmptyResult`] so the
/// caller can move on to the next provider.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Provider name for logs and diagnostics
    fn name(&self) -> &'static str;

    /// Fetch one page of articles for an already normalized query
    async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>, NewsError>;
}

/// HTTP client with the provider timeout and user agent
pub(crate) fn build_http_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Send a request and return the body of a successful response
pub(crate) async fn send_and_read(request: RequestBuilder) -> Result<String, NewsError> {
    let response = request.send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(NewsError::ApiError {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}

/// Render a request URL for logging with one query parameter masked
pub(crate) fn redact_param(url: &Url, name: &str) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == name {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Loopback HTTP server returning canned responses, one connection each
#[cfg(test)]
pub(crate) mod test_server {
    use reqwest::Client;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::{REQUEST_TIMEOUT, USER_AGENT};

    /// Provider client settings without proxy detection, so loopback stays direct
    pub fn client() -> Client {
        Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()
            .unwrap()
    }

    /// Serve `responses` in order and hand back the raw request heads
    pub async fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let mut heads = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().await.unwrap();

                let mut head = Vec::new();
                let mut chunk = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut chunk).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    head.extend_from_slice(&chunk[..n]);
                }
                heads.push(String::from_utf8_lossy(&head).into_owned());

                let reason = if status == 200 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                stream.write_all(response.as_bytes()).await.unwrap();
                let _ = stream.shutdown().await;
            }
            heads
        });

        (base_url, handle)
    }

    /// Base URL of a loopback port nothing listens on
    pub async fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }
}
