//! Configuration module for the price-mentions application.

pub mod client;
pub mod market;
pub mod trends;

mod debug; // Private because of the public re-export. Forces files to use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;
pub mod run;

// Re-export commonly used items
pub use client::CLIENT;
pub use market::MARKET;
pub use persistence::DEFAULT_OUTPUT_PATH;
pub use plot::{PLOT_CONFIG, PlotLabels};
pub use run::RunConfig;
pub use trends::TRENDS;
