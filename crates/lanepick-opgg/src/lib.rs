// op.gg champion statistics as a candidate source.
//
// Fetches the statistics page with a single GET per pick and extracts the
// requested role's tier table. There is no retry: any transport or status
// failure is returned to the session, which ends it.

pub mod parse;

use async_trait::async_trait;
use lanepick_core::{ChampionSource, FetchError, Role, Tier};
use tracing::{debug, info};

pub use parse::parse_tier_list;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const DEFAULT_URL: &str = "https://euw.op.gg/champion/statistics";
pub const DEFAULT_USER_AGENT: &str = concat!("lanepick/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// OpggClient
// ---------------------------------------------------------------------------

/// HTTP client for the champion statistics page.
pub struct OpggClient {
    http: reqwest::Client,
    url: String,
}

impl OpggClient {
    /// Build a client for `url` sending `user_agent` with every request.
    pub fn new(url: impl Into<String>, user_agent: &str) -> Result<Self, FetchError> {
        let url = url.into();
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                source: Box::new(e),
            })?;
        Ok(Self { http, url })
    }

    /// Download the statistics page body.
    pub async fn page(&self) -> Result<String, FetchError> {
        let transport = |e: reqwest::Error| FetchError::Transport {
            url: self.url.clone(),
            source: Box::new(e),
        };

        debug!(url = %self.url, "requesting statistics page");
        let response = self.http.get(&self.url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        info!(url = %self.url, bytes = body.len(), "statistics page downloaded");
        Ok(body)
    }
}

#[async_trait]
impl ChampionSource for OpggClient {
    async fn fetch(&self, role: Role, tiers: &[Tier]) -> Result<Vec<String>, FetchError> {
        let html = self.page().await?;
        parse_tier_list(&html, role, tiers)
    }
}
