// Candidate source: where the tier list for a role comes from.

use async_trait::async_trait;
use thiserror::Error;

use crate::role::{Role, Tier};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("no tier table for role {role} on the statistics page")]
    MissingTable { role: Role },
}

/// Supplies the ranked champion list for a role.
#[async_trait]
pub trait ChampionSource: Send + Sync {
    /// Champion names for `role` whose tier badge is one of `tiers`, in the
    /// source's document order. Names appearing under several matching
    /// classifications are returned once per match.
    async fn fetch(&self, role: Role, tiers: &[Tier]) -> Result<Vec<String>, FetchError>;
}

/// A fixed in-memory tier list, keyed by role.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    rows: Vec<(Role, Tier, String)>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, role: Role, tier: Tier, champion: impl Into<String>) -> Self {
        self.rows.push((role, tier, champion.into()));
        self
    }
}

#[async_trait]
impl ChampionSource for StaticSource {
    async fn fetch(&self, role: Role, tiers: &[Tier]) -> Result<Vec<String>, FetchError> {
        Ok(self
            .rows
            .iter()
            .filter(|(r, tier, _)| *r == role && tiers.contains(tier))
            .map(|(_, _, name)| name.clone())
            .collect())
    }
}
