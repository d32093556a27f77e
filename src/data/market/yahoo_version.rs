use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::MARKET;
use crate::data::http::{ProviderError, get_text};
use crate::data::market::CreatePriceSeries;
use crate::domain::{DateWindow, MarketSymbol};
use crate::models::{DatedValue, PriceSeries};
use crate::utils::TimeUtils;

/*
{
  "chart": {
    "result": [{
      "meta": { "currency": "USD", "symbol": "DOGE-USD", "gmtoffset": 0, "timezone": "UTC" },
      "timestamp": [1704067200, 1704153600],
      "indicators": { "quote": [{ "close": [0.0899, null], "open": [...], ... }] }
    }],
    "error": null
  }
}
*/
#[derive(Deserialize, Debug)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Deserialize, Debug)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartApiError>,
}

#[derive(Deserialize, Debug)]
struct ChartApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    #[serde(default)]
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug, Default)]
struct ChartMeta {
    symbol: Option<String>,
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug)]
struct Quote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Parses a raw chart-API body into daily closes.
/// Rows with a null close are dropped; dates are shifted by the exchange `gmtoffset`.
pub fn parse_chart_response(body: &str, symbol: &MarketSymbol) -> Result<PriceSeries> {
    let envelope: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| ProviderError::Malformed(format!("chart response: {}", e)))?;

    if let Some(err) = envelope.chart.error {
        return Err(ProviderError::Provider {
            code: err.code,
            description: err.description,
        }
        .into());
    }

    let result = envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| ProviderError::NoData(symbol.to_string()))?;

    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    if closes.len() != result.timestamp.len() {
        return Err(ProviderError::Malformed(format!(
            "{} timestamps but {} closes for {}",
            result.timestamp.len(),
            closes.len(),
            symbol
        ))
        .into());
    }

    let offset = result.meta.gmtoffset;
    let points: Vec<DatedValue> = result
        .timestamp
        .iter()
        .zip(closes)
        .filter_map(|(ts, close)| {
            let close = close.filter(|c| c.is_finite())?;
            let date = TimeUtils::epoch_sec_to_date(*ts, offset)?;
            Some(DatedValue::new(date, close))
        })
        .collect();

    let name = result.meta.symbol.unwrap_or_else(|| symbol.to_string());
    Ok(PriceSeries::new(name, points))
}

pub struct YahooChartVersion {
    client: Client,
}

impl YahooChartVersion {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CreatePriceSeries for YahooChartVersion {
    fn signature(&self) -> &'static str {
        "Yahoo Finance API"
    }

    async fn create_price_series(
        &self,
        symbol: &MarketSymbol,
        window: &DateWindow,
    ) -> Result<PriceSeries> {
        let url = format!("{}/{}", MARKET.chart_base_url, symbol.api_name());
        let query = [
            ("period1", window.start_epoch_sec().to_string()),
            ("period2", window.end_epoch_sec().to_string()),
            ("interval", MARKET.query.interval.to_string()),
            ("events", MARKET.query.events.to_string()),
        ];

        let body = get_text(&self.client, self.signature(), &url, &query).await?;
        let series = parse_chart_response(&body, symbol)
            .with_context(|| format!("Failed to read {} prices for {}", symbol, window))?;

        // The provider appends a live bar for today; the window end is exclusive
        let in_window: Vec<DatedValue> = series
            .points()
            .iter()
            .filter(|p| window.contains(p.date))
            .copied()
            .collect();
        let dropped = series.len() - in_window.len();
        if dropped > 0 {
            log::debug!("Dropped {} price rows outside {}", dropped, window);
        }

        Ok(PriceSeries::new(series.symbol, in_window))
    }
}
