//! Remote services the report travels between.
//! [StatsSource] provides language statistics and [PasteSink] stores the rendered report.
//! [wakatime::WakaTimeClient] and [gist::GistClient] are the real implementations.

pub mod entities;
pub mod error;
pub mod gist;
pub mod wakatime;

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;

#[cfg(test)]
use mockall::automock;

use entities::Stats;
use error::{ApiError, Result};

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Provides the current user's statistics for the trailing window.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StatsSource {
    async fn fetch_recent_stats(&self) -> Result<Stats>;
}

/// Destination of the report. Overwrites one file of an existing paste.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PasteSink {
    /// Returns the name of the file that was overwritten.
    async fn publish(&self, paste_id: &str, content: &str) -> Result<String>;
}

/// Address of a response without its query, so credentials passed as query parameters never end
/// up in errors or logs.
pub(crate) fn redacted_url(url: &reqwest::Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

/// Turns non 2xx responses into [ApiError::Status] and decodes the body of the rest.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = redacted_url(response.url());
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::Status {
            url,
            status: status.as_u16(),
            body,
        });
    }
    serde_json::from_str(&body).map_err(|source| ApiError::Malformed { url, source })
}

/// Like [read_json] for responses whose body is of no interest.
pub(crate) async fn ensure_success(response: Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let url = redacted_url(response.url());
    let body = response.text().await?;
    Err(ApiError::Status {
        url,
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::redacted_url;

    #[test]
    fn test_redacted_url_drops_query() {
        let url = reqwest::Url::parse(
            "https://wakatime.com/api/v1/users/current/stats/last_7_days?api_key=secret",
        )
        .unwrap();
        assert_eq!(
            redacted_url(&url),
            "https://wakatime.com/api/v1/users/current/stats/last_7_days"
        );
    }
}
