use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

/// Status code and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// The one outbound call the client makes.
///
/// An `Err` means the exchange never completed (DNS, connect, timeout, body read).
/// Non-2xx statuses are not errors at this level.
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpReply>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpReply> {
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status().as_u16();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")?;

        Ok(HttpReply { status, body })
    }
}
