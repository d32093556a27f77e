//! Trends provider (Google Trends) configuration.

/// Endpoints used by the three-step trends handshake
pub struct TrendsEndpoints {
    /// Landing page hit first so the provider hands out session cookies
    pub home_url: &'static str,
    pub explore_url: &'static str,
    pub multiline_url: &'static str,
}

/// The Master Trends Configuration
pub struct TrendsConfig {
    pub endpoints: TrendsEndpoints,
    pub default_keyword: &'static str,
    /// Host language passed as `hl`
    pub default_hl: &'static str,
    /// Timezone offset in minutes passed as `tz`
    pub default_tz: i32,
    /// Explore widget holding the interest-over-time request + token
    pub timeseries_widget_id: &'static str,
    /// Leading rows the legacy pipeline discarded before aligning by position.
    /// Applied by `--legacy` or an explicit `--skip-leading`.
    pub legacy_leading_trim: usize,
    /// Timeframe the legacy pipeline asked for, regardless of the price window
    pub legacy_timeframe: &'static str,
}

pub const TRENDS: TrendsConfig = TrendsConfig {
    endpoints: TrendsEndpoints {
        home_url: "https://trends.google.com/?geo=US",
        explore_url: "https://trends.google.com/trends/api/explore",
        multiline_url: "https://trends.google.com/trends/api/widgetdata/multiline",
    },
    default_keyword: "Dogecoin",
    default_hl: "en-US",
    default_tz: 365,
    timeseries_widget_id: "TIMESERIES",
    legacy_leading_trim: 2,
    legacy_timeframe: "today 1-m",
};
