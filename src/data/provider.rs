use crate::domain::Period;
use crate::error::AnalysisError;
use crate::models::PriceSeries;

/// Source of historical OHLC data.
///
/// Implementations block until the series is available. A failure is
/// terminal for that request; callers do not retry.
pub trait MarketDataProvider {
    /// Fetch `symbol` at `interval_code` (e.g. `1d`, `15m`) covering `period`
    /// back from now, oldest point first.
    fn fetch_series(
        &self,
        symbol: &str,
        interval_code: &str,
        period: &Period,
    ) -> Result<PriceSeries, AnalysisError>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}
