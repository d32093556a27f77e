//! Market-data provider (Yahoo Finance chart API) configuration.

/// Query defaults for the chart endpoint
pub struct ChartQuery {
    /// Bar width requested from the chart endpoint
    pub interval: &'static str,
    /// Corporate events requested alongside the bars (none are used for crypto)
    pub events: &'static str,
}

/// The Master Market-Data Configuration
pub struct MarketConfig {
    /// Base URL of the chart API (symbol is appended as a path segment)
    pub chart_base_url: &'static str,
    pub default_symbol: &'static str,
    /// Short label used for the price axis and legend (e.g. "DOGE")
    pub default_asset_label: &'static str,
    pub default_lookback_days: u32,
    pub query: ChartQuery,
}

pub const MARKET: MarketConfig = MarketConfig {
    chart_base_url: "https://query1.finance.yahoo.com/v8/finance/chart",
    default_symbol: "DOGE-USD",
    default_asset_label: "DOGE",
    default_lookback_days: 30,
    query: ChartQuery {
        interval: "1d",
        events: "history",
    },
};
