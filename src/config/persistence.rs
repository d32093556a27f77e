//! Output artifact configuration

/// Default path of the rendered chart (overwritten on every run)
pub const DEFAULT_OUTPUT_PATH: &str = "dogecoin_analysis.png";
