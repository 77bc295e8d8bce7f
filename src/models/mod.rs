// Series models for level analysis
// Pure data containers, independent of where the data came from or how it is shown

pub mod timeseries;

// Re-export key types for convenience
pub use timeseries::{IndicatorSeries, PriceSeries};
