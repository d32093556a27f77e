use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::data::trends::{CreateInterestSeries, parse_multiline_response};
use crate::domain::Timeframe;
use crate::models::InterestSeries;

/// Reads a saved widget-data (multiline) response instead of calling the network.
pub struct InterestReplayVersion {
    pub path: PathBuf,
}

#[async_trait]
impl CreateInterestSeries for InterestReplayVersion {
    fn signature(&self) -> &'static str {
        "Interest Replay File"
    }

    async fn create_interest_series(
        &self,
        keyword: &str,
        timeframe: &Timeframe,
    ) -> Result<InterestSeries> {
        log::debug!(
            "Replaying '{}' interest from {:?} (requested timeframe {} ignored)",
            keyword,
            self.path,
            timeframe
        );
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read interest replay file {:?}", self.path))?;
        parse_multiline_response(&body, keyword)
            .with_context(|| format!("Failed to parse interest replay file {:?}", self.path))
    }
}
