//! Configuration module for the key-levels application.

pub mod analysis;
pub mod binance;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use binance::BINANCE;
