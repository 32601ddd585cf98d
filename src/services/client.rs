//! MISO Data Client
//!
//! HTTP client for the backend's realtime data endpoint, behind the
//! [`DataSource`] seam so the poller can run against fakes in tests.

use std::future::Future;
use std::time::Duration;

use reqwest::header::ACCEPT;
use snafu::ResultExt;
use tracing::debug;

use crate::constants::MISO_RT_DATA_PATH;
use crate::domain::Dataset;
use crate::error::{HttpSnafu, Result};

/// Anything that can produce a fresh dataset
pub trait DataSource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<Dataset>> + Send;
}

/// Build the realtime data URL from a base URL
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), MISO_RT_DATA_PATH)
}

/// Client for `GET {base_url}/api/miso-rt-data/`
#[derive(Clone, Debug)]
pub struct MisoClient {
    http: reqwest::Client,
    url: String,
}

impl MisoClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let url = endpoint_url(base_url);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context(HttpSnafu { url: &url })?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get(&self) -> Result<Dataset> {
        let url = self.url.as_str();
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .context(HttpSnafu { url })?
            .error_for_status()
            .context(HttpSnafu { url })?;
        let body = response.text().await.context(HttpSnafu { url })?;

        let dataset = Dataset::from_json(url, &body)?;
        debug!(url, nodes = dataset.nodes.len(), "Fetched MISO data");
        Ok(dataset)
    }
}

impl DataSource for MisoClient {
    fn fetch(&self) -> impl Future<Output = Result<Dataset>> + Send {
        self.get()
    }
}
