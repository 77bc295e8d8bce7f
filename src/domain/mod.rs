// Domain types and value objects
pub mod key_levels;
pub mod period;
pub mod price_point;
pub mod timeframe;

// Re-export commonly used types
pub use key_levels::KeyLevels;
pub use period::Period;
pub use price_point::PricePoint;
pub use timeframe::{CANONICAL_TIMEFRAMES, Timeframe};
