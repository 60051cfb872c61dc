use std::future::Future;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};

/// Status and raw text body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} failed: {message}")]
    Other { url: String, message: String },
}

/// Sends a UTF-8 JSON body as a POST and hands back status plus body text.
pub trait HttpTransport: Send + Sync {
    fn post_json(
        &self,
        url: &Url,
        body: String,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

/// Production transport backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::new(client))
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json(
        &self,
        url: &Url,
        body: String,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        let request = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(body);
        let url = url.to_string();

        async move {
            let response = request
                .send()
                .await
                .map_err(|source| TransportError::Request {
                    url: url.clone(),
                    source,
                })?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|source| TransportError::Request { url, source })?;
            Ok(TransportResponse { status, body })
        }
    }
}
