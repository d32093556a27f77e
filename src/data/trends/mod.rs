pub mod google_version;
pub mod replay_version;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::Timeframe;
use crate::models::InterestSeries;

pub use google_version::{GoogleTrendsVersion, parse_explore_response, parse_multiline_response};
pub use replay_version::InterestReplayVersion;

#[async_trait]
pub trait CreateInterestSeries: Send + Sync {
    // Either create an interest series OR return an anyhow::error
    async fn create_interest_series(
        &self,
        keyword: &str,
        timeframe: &Timeframe,
    ) -> Result<InterestSeries>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}
