// Market data: provider interface and the Binance implementation
pub mod bn_kline;
pub mod intervals;
pub mod provider;

// Re-export commonly used types
pub use bn_kline::BinanceProvider;
pub use intervals::KlineInterval;
pub use provider::MarketDataProvider;
