use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::client::reply::{ClientError, HttpReply};
use crate::web::models::QueryRequest;

/// How the controller reaches the proxy endpoint.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post_query(&self, request: &QueryRequest) -> Result<HttpReply, ClientError>;
}

/// Talks to a running proxy over HTTP.
pub struct HttpTransport {
    endpoint: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn post_query(&self, request: &QueryRequest) -> Result<HttpReply, ClientError> {
        debug!("POST {} {:?}", self.endpoint, request);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(HttpReply { status, body })
    }
}
