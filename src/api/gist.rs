use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, RequestBuilder};
use tracing::{debug, info, instrument};

use super::{
    ensure_success,
    entities::{PasteMetadata, PasteUpdate},
    error::{ApiError, Result},
    read_json, PasteSink, USER_AGENT,
};

pub const DEFAULT_GIST_API_URL: &str = "https://api.github.com/gists";

/// Client of the GitHub gists API, authorized with `Authorization: token <token>`.
pub struct GistClient {
    base_url: String,
    token: String,
    http: Client,
}

impl GistClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            base_url: base_url.into(),
            token: token.into(),
            http,
        })
    }

    fn url(&self, paste_id: &str) -> String {
        format!("{}/{paste_id}", self.base_url.trim_end_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("token {}", self.token))
    }

    pub async fn get_metadata(&self, paste_id: &str) -> Result<PasteMetadata> {
        let url = self.url(paste_id);
        debug!("Reading paste metadata from {url}");
        let response = self.authorized(self.http.get(&url)).send().await?;
        read_json(response).await
    }

    pub async fn update(&self, paste_id: &str, update: &PasteUpdate) -> Result<()> {
        let url = self.url(paste_id);
        debug!("Updating paste at {url}");
        let response = self
            .authorized(self.http.patch(&url))
            .json(update)
            .send()
            .await?;
        ensure_success(response).await
    }
}

#[async_trait]
impl PasteSink for GistClient {
    /// The target file is whichever the remote lists first. Its order is not guaranteed to stay
    /// the same between requests, so pastes with several files may get a different one updated.
    #[instrument(skip(self, content))]
    async fn publish(&self, paste_id: &str, content: &str) -> Result<String> {
        let metadata = self.get_metadata(paste_id).await?;
        let filename = metadata
            .first_file()
            .map(|file| file.filename.clone())
            .ok_or_else(|| ApiError::EmptyPaste {
                id: paste_id.to_string(),
            })?;

        self.update(paste_id, &PasteUpdate::single_file(filename.clone(), content))
            .await?;
        info!("Updated {filename} of paste {paste_id}");
        Ok(filename)
    }
}
