// Aligning the mention series onto the price dates, plus summary statistics
pub mod alignment;
pub mod correlation;

pub use alignment::{
    AlignmentError, AlignmentMode, align, align_by_date, align_positional, zero_fill,
};
pub use correlation::{CorrelationSummary, correlation};
