pub mod normalize;

use anyhow::Result;
use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::json;

/// Raw reply from the question-answering service.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub content_type: String,
    pub raw: String,
}

// Client for the upstream question-answering service
pub struct UpstreamClient {
    url: String,
    client: Client,
}

impl UpstreamClient {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        info!("Using upstream chat service at: {}", url);

        Self {
            url,
            client: Client::new(),
        }
    }

    /// Relay a single query. The upstream status is reported but never turned
    /// into an error; only transport failures are.
    pub async fn query(&self, query: &str) -> Result<UpstreamReply> {
        debug!("Forwarding query to upstream ({} bytes)", query.len());

        // No auth headers are attached; forward them here if the upstream starts requiring them
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "query": query }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream answered with status {}, relaying body anyway", status);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let raw = response.text().await?;
        debug!("Upstream replied {} with {} bytes of {}", status, raw.len(), content_type);

        Ok(UpstreamReply {
            status,
            content_type,
            raw,
        })
    }
}
