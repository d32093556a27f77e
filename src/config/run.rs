//! Runtime configuration for one pipeline run, built from the command line.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;

use crate::Cli;
use crate::analysis::AlignmentMode;
use crate::config::TRENDS;
use crate::domain::{DateWindow, MarketSymbol, Timeframe};

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub symbol: MarketSymbol,
    pub keyword: String,
    pub window: DateWindow,
    pub timeframe: Timeframe,
    pub alignment: AlignmentMode,
    /// Leading interest rows discarded before aligning
    pub skip_leading: usize,
    pub output: PathBuf,
    pub font: Option<PathBuf>,
    pub price_replay: Option<PathBuf>,
    pub interest_replay: Option<PathBuf>,
    pub hl: String,
    pub tz: i32,
}

impl RunConfig {
    /// `today` is the default (exclusive) window end when `--end-date` is absent.
    pub fn from_cli(args: &Cli, today: NaiveDate) -> Result<Self> {
        let window = DateWindow::ending_at(args.end_date.unwrap_or(today), args.days)?;

        let keyword = args.keyword.trim().to_string();
        if keyword.is_empty() {
            anyhow::bail!("Keyword must not be empty");
        }

        let timeframe = match (&args.timeframe, args.legacy) {
            (Some(named), _) => Timeframe::Named(named.trim().to_string()),
            (None, true) => Timeframe::Named(TRENDS.legacy_timeframe.to_string()),
            (None, false) => Timeframe::matching(&window),
        };

        let (alignment, skip_leading) = if args.legacy {
            let skip = args.skip_leading.unwrap_or(TRENDS.legacy_leading_trim);
            (AlignmentMode::Positional, skip)
        } else {
            (args.alignment, args.skip_leading.unwrap_or(0))
        };

        Ok(Self {
            symbol: MarketSymbol::new(args.symbol.as_str()),
            keyword,
            window,
            timeframe,
            alignment,
            skip_leading,
            output: args.output.clone(),
            font: args.font.clone(),
            price_replay: args.price_replay.clone(),
            interest_replay: args.interest_replay.clone(),
            hl: args.hl.clone(),
            tz: args.tz,
        })
    }
}
