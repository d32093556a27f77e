// Data fetching from the market-data and trends providers
pub mod http;
pub mod market;
pub mod pre_render_async;
pub mod trends;

// Re-export commonly used types
pub use http::ProviderError;
pub use pre_render_async::{FetchedSeries, SeriesSources, fetch_series};
