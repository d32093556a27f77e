pub mod replay_version;
pub mod yahoo_version;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{DateWindow, MarketSymbol};
use crate::models::PriceSeries;

pub use replay_version::PriceReplayVersion;
pub use yahoo_version::{YahooChartVersion, parse_chart_response};

#[async_trait]
pub trait CreatePriceSeries: Send + Sync {
    // Either create a price series OR return an anyhow::error
    async fn create_price_series(
        &self,
        symbol: &MarketSymbol,
        window: &DateWindow,
    ) -> Result<PriceSeries>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}
