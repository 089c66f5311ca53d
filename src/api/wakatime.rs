use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::{
    entities::{Stats, StatsResponse},
    error::Result,
    read_json, StatsSource, USER_AGENT,
};

pub const DEFAULT_WAKA_API_URL: &str = "https://wakatime.com/api/v1";

const LAST_7_DAYS_PATH: &str = "users/current/stats/last_7_days";

/// Client of the WakaTime stats API. The key is sent as the `api_key` query parameter.
pub struct WakaTimeClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl WakaTimeClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl StatsSource for WakaTimeClient {
    #[instrument(skip(self))]
    async fn fetch_recent_stats(&self) -> Result<Stats> {
        let url = self.url(LAST_7_DAYS_PATH);
        debug!("Requesting stats from {url}");
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;
        let response: StatsResponse = read_json(response).await?;
        debug!("Received {} languages", response.data.languages.len());
        Ok(response.data)
    }
}
