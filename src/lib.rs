// Core modules
pub mod analysis;
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types
pub use analysis::{AlignmentMode, CorrelationSummary};
pub use chart::{DualAxisFigure, RenderOptions};
pub use config::RunConfig;
pub use data::{FetchedSeries, SeriesSources, fetch_series};
pub use domain::{DateWindow, MarketSymbol, Timeframe};
pub use models::{AlignedSeries, AlignmentReport, InterestSeries, PriceSeries};
pub use pipeline::{PreparedChart, RunSummary, prepare_chart, run_pipeline};

use std::path::PathBuf;

// CLI argument parsing
use chrono::NaiveDate;
use clap::Parser;

use config::{DEFAULT_OUTPUT_PATH, MARKET, TRENDS};

/// Chart a crypto asset's daily closing price against search interest in a keyword.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Market-data ticker to chart
    #[arg(long, default_value = MARKET.default_symbol)]
    pub symbol: String,

    /// Search term whose interest over time is charted
    #[arg(long, default_value = TRENDS.default_keyword)]
    pub keyword: String,

    /// Number of days to look back from the end date
    #[arg(long, default_value_t = MARKET.default_lookback_days)]
    pub days: u32,

    /// Exclusive end of the window (YYYY-MM-DD), defaults to today (UTC)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Trends timeframe override, e.g. "today 1-m" (defaults to the price window)
    #[arg(long)]
    pub timeframe: Option<String>,

    /// How mention values are matched to price dates
    #[arg(long, value_enum, default_value_t = AlignmentMode::Date)]
    pub alignment: AlignmentMode,

    /// Drop this many leading interest rows before aligning
    #[arg(long)]
    pub skip_leading: Option<usize>,

    /// Legacy behaviour: "today 1-m" timeframe, 2-row trim and positional alignment
    #[arg(long, default_value_t = false)]
    pub legacy: bool,

    /// Where the PNG chart is written (overwritten if present)
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// TrueType font used for chart text
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Read prices from a saved chart-API response instead of the network
    #[arg(long)]
    pub price_replay: Option<PathBuf>,

    /// Read interest from a saved trends widget-data response instead of the network
    #[arg(long)]
    pub interest_replay: Option<PathBuf>,

    /// Trends host language
    #[arg(long, default_value = TRENDS.default_hl)]
    pub hl: String,

    /// Trends timezone offset in minutes
    #[arg(long, default_value_t = TRENDS.default_tz, allow_negative_numbers = true)]
    pub tz: i32,
}
