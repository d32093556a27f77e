use std::process::ExitCode;

use clap::Parser;
use tokio::runtime::Runtime;

use price_mentions::utils::time_utils::today_utc;
use price_mentions::{Cli, RunConfig, SeriesSources, run_pipeline};

fn main() -> ExitCode {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("price-mentions panicked: {:?}", panic_info);
    }));
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::debug!("Parsed arguments: {:?}", args);

    // C. Fetch, align, render (Blocking)
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let config = RunConfig::from_cli(args, today_utc())?;
    let sources = SeriesSources::from_config(&config)?;

    let rt = Runtime::new()?;
    let summary = rt.block_on(run_pipeline(&config, &sources))?;

    log::info!(
        "Done: prices from {}, mentions from {}, correlation {}",
        summary.price_signature,
        summary.interest_signature,
        summary.correlation
    );
    Ok(())
}
