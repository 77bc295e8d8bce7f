#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{AnalysisResult, LogReporter, Reporter, analyze};
pub use data::{BinanceProvider, MarketDataProvider};
pub use domain::{KeyLevels, Period, PricePoint, Timeframe};
pub use error::AnalysisError;
pub use models::{IndicatorSeries, PriceSeries};
pub use ui::{ConsoleReport, ReportSink};

// CLI argument parsing
use anyhow::{Result, bail};
use clap::Parser;

use crate::config::ANALYSIS;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ticker symbol to analyse (e.g. btcusdt). Prompted for when omitted.
    pub symbol: Option<String>,

    /// How far back to fetch, e.g. 30d, 12h or 2w.
    #[arg(long)]
    pub period: Option<Period>,
}

impl Cli {
    pub fn period(&self) -> Period {
        self.period.unwrap_or(ANALYSIS.default_period)
    }
}

/// Trim and uppercase a user-supplied ticker.
pub fn normalize_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        bail!("No symbol given");
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric() || "-._^=".contains(c)) {
        bail!("'{}' is not a valid ticker symbol", symbol);
    }
    Ok(symbol)
}

/// Analyse `symbol` on the configured timeframes and hand the result to `sink`.
/// This is the public API for the binary to call.
pub fn run(
    symbol: &str,
    period: &Period,
    provider: &dyn MarketDataProvider,
    reporter: &mut dyn Reporter,
    sink: &mut dyn ReportSink,
) -> Result<AnalysisResult> {
    log::info!(
        "Analysing {} over {} timeframes using {} ({} lookback)",
        symbol,
        ANALYSIS.timeframes.len(),
        provider.signature(),
        period
    );
    let result = analyze(provider, reporter, symbol, ANALYSIS.timeframes, period);
    if result.failed_count() > 0 {
        log::warn!(
            "{} of {} timeframes produced no levels",
            result.failed_count(),
            result.len()
        );
    }
    sink.render(symbol, &result)?;
    Ok(result)
}
