//! Binance-specific configuration constants and types.

/// Configuration for Binance REST API client
/// (This is the runtime struct used by the Http Client)
pub struct BinanceApiConfig {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

impl Default for BinanceApiConfig {
    fn default() -> Self {
        Self {
            timeout_ms: BINANCE.client.timeout_ms,
            retries: BINANCE.client.retries,
            backoff_ms: BINANCE.client.backoff_ms,
        }
    }
}

/// Configuration for REST API Limits
pub struct RestLimits {
    /// Number of klines requested per page (Binance maximum is 1000)
    pub klines_limit: i32,
    /// Hard stop on pages fetched for a single series
    pub max_pages: usize,
}

/// Default values for the Rest Client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

/// The Master Configuration Struct
pub struct BinanceConfig {
    pub limits: RestLimits,
    pub client: ClientDefaults,
}

pub const BINANCE: BinanceConfig = BinanceConfig {
    limits: RestLimits {
        klines_limit: 1000,
        // 30 days of 1m klines is 43,200 rows, i.e. 44 pages
        max_pages: 100,
    },
    client: ClientDefaults {
        timeout_ms: 10_000,
        // A failed request is terminal for its timeframe
        retries: 0,
        backoff_ms: 0,
    },
};
