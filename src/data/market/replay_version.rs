use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::data::market::{CreatePriceSeries, parse_chart_response};
use crate::domain::{DateWindow, MarketSymbol};
use crate::models::PriceSeries;

/// Reads a saved chart-API response instead of calling the network.
/// The requested window is not applied: the file is replayed as recorded.
pub struct PriceReplayVersion {
    pub path: PathBuf,
}

#[async_trait]
impl CreatePriceSeries for PriceReplayVersion {
    fn signature(&self) -> &'static str {
        "Price Replay File"
    }

    async fn create_price_series(
        &self,
        symbol: &MarketSymbol,
        window: &DateWindow,
    ) -> Result<PriceSeries> {
        log::debug!(
            "Replaying prices from {:?} (requested window {} ignored)",
            self.path,
            window
        );
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read price replay file {:?}", self.path))?;
        parse_chart_response(&body, symbol)
            .with_context(|| format!("Failed to parse price replay file {:?}", self.path))
    }
}
