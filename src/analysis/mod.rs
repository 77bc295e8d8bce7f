// Indicator computation, level extraction and the multi-timeframe run
pub mod indicators;
pub mod levels;
pub mod multi_timeframe;

// Re-export commonly used types
pub use indicators::compute_indicators;
pub use levels::{extract_levels, find_resistance_levels, find_support_levels};
pub use multi_timeframe::{
    AnalysisResult, LogReporter, Reporter, TimeframeLevels, analyze, analyze_timeframe,
};
