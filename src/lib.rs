pub mod auth;
pub mod client;
pub mod config;
pub mod upstream;
pub mod value;
pub mod web;

#[cfg(test)]
pub(crate) mod test_support;

use anyhow::{Context, Result};
use tera::Tera;

use config::Settings;
use upstream::UpstreamClient;

// App state structure
pub struct AppState {
    pub tera: Tera,
    pub upstream: UpstreamClient,
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self> {
        let mut tera = Tera::new(&settings.templates)
            .with_context(|| format!("failed to parse templates at {}", settings.templates))?;
        tera.autoescape_on(vec![".html"]);

        Ok(Self {
            tera,
            upstream: UpstreamClient::new(settings.upstream_url.clone()),
            settings,
        })
    }
}
