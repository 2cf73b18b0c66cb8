use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::error::ApiError;
use super::filter::CaptureFilter;
use super::types::{ListEnvelope, PageEnvelope, PageResult, Station};

pub const DEFAULT_BASE_URL: &str = "https://api.bramonmeteor.org/v1/";
const STATIONS_PAGE_SIZE: u32 = 1000;
const USER_AGENT: &str = concat!("bramon-gallery/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Deserialize)]
pub struct BramonConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_connect_timeout", deserialize_with = "deserialize_duration")]
    pub connect_timeout: Duration,
    #[serde(default = "default_timeout", deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for BramonConfig {
    fn default() -> Self {
        BramonConfig {
            base_url: default_base_url(),
            api_key: String::new(),
            connect_timeout: default_connect_timeout(),
            timeout: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}

/// Client for the BRAMON operator API
#[derive(Debug, Clone)]
pub struct BramonClient {
    base_url: Url,
    api_key: String,
    client: Client,
}

impl BramonClient {
    pub fn new(config: &BramonConfig) -> Result<Self, ApiError> {
        // Url::join drops the last path segment unless the base ends in '/'
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(BramonClient {
            base_url,
            api_key: config.api_key.clone(),
            client,
        })
    }

    /// List every station visible to the configured key.
    pub async fn fetch_stations(&self) -> Result<Vec<Station>, ApiError> {
        let envelope: ListEnvelope<Station> = self
            .get(
                "operator/stations",
                &[("limit", STATIONS_PAGE_SIZE.to_string())],
            )
            .await?;
        log::debug!("Fetched {} stations", envelope.data.len());
        Ok(envelope.data)
    }

    /// Fetch one page of captures matching `filter`.
    pub async fn fetch_captures(&self, filter: &CaptureFilter) -> Result<PageResult, ApiError> {
        let envelope: PageEnvelope = self
            .get("operator/captures", &filter.to_api_params())
            .await?;
        let page = PageResult::from(envelope);
        log::debug!(
            "Fetched {} captures (page {}/{})",
            page.items.len(),
            page.current_page,
            page.last_page
        );
        Ok(page)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.base_url.join(path)?;

        let response = self
            .client
            .get(url)
            .query(params)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("{} returned {}: {}", path, status, body);
            return Err(ApiError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
