// Data models for the price/mention pipeline
// These modules contain plain data, independent of providers and rendering

pub mod series;

// Re-export key types for convenience
pub use series::{
    AlignedSeries, AlignmentReport, DatedValue, InterestPoint, InterestSeries, PriceSeries,
};
