use serde::Serialize;

use crate::analysis::indicators::compute_indicators;
use crate::analysis::levels::extract_levels;
use crate::data::MarketDataProvider;
use crate::domain::{KeyLevels, Period, Timeframe};
use crate::error::AnalysisError;

/// Receives progress and failures while timeframes are analysed.
pub trait Reporter {
    fn timeframe_started(&mut self, _symbol: &str, _timeframe: &Timeframe) {}

    fn timeframe_completed(
        &mut self,
        _symbol: &str,
        _timeframe: &Timeframe,
        _points: usize,
        _levels: &KeyLevels,
    ) {
    }

    fn timeframe_failed(&mut self, symbol: &str, timeframe: &Timeframe, error: &AnalysisError);
}

/// Forwards everything to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn timeframe_started(&mut self, symbol: &str, timeframe: &Timeframe) {
        log::info!("Processing: ({}, {})", symbol, timeframe);
    }

    fn timeframe_completed(
        &mut self,
        symbol: &str,
        timeframe: &Timeframe,
        points: usize,
        levels: &KeyLevels,
    ) {
        log::debug!(
            "{} {}: {} points, {} support / {} resistance levels",
            symbol,
            timeframe.label(),
            points,
            levels.support_levels.len(),
            levels.resistance_levels.len(),
        );
    }

    fn timeframe_failed(&mut self, symbol: &str, timeframe: &Timeframe, error: &AnalysisError) {
        log::warn!(
            "⚠️  {} {}: {}, reporting no levels: {}",
            symbol,
            timeframe.label(),
            failure_kind(error),
            error
        );
    }
}

/// Short wording for the side a timeframe failure came from.
pub fn failure_kind(error: &AnalysisError) -> &'static str {
    if error.is_provider_error() {
        "fetch failed"
    } else {
        "unusable data"
    }
}

/// Levels for one timeframe, plus why they are empty if the timeframe failed.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TimeframeLevels {
    pub label: String,
    pub levels: KeyLevels,
    pub failure: Option<String>,
}

/// Per-timeframe levels in the order the timeframes were configured.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    pub symbol: String,
    pub timeframes: Vec<TimeframeLevels>,
}

impl AnalysisResult {
    pub fn new(symbol: &str) -> Self {
        AnalysisResult {
            symbol: symbol.to_string(),
            timeframes: Vec::new(),
        }
    }

    pub fn get(&self, label: &str) -> Option<&KeyLevels> {
        self.entry(label).map(|e| &e.levels)
    }

    pub fn failure(&self, label: &str) -> Option<&str> {
        self.entry(label).and_then(|e| e.failure.as_deref())
    }

    pub fn labels(&self) -> Vec<&str> {
        self.timeframes.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeframeLevels> {
        self.timeframes.iter()
    }

    pub fn len(&self) -> usize {
        self.timeframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeframes.is_empty()
    }

    pub fn failed_count(&self) -> usize {
        self.timeframes.iter().filter(|e| e.failure.is_some()).count()
    }

    fn entry(&self, label: &str) -> Option<&TimeframeLevels> {
        self.timeframes.iter().find(|e| e.label == label)
    }
}

/// Fetch, compute indicators and extract levels for a single timeframe.
pub fn analyze_timeframe(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    timeframe: &Timeframe,
    period: &Period,
) -> Result<(usize, KeyLevels), AnalysisError> {
    let series = provider.fetch_series(symbol, timeframe.interval_code(), period)?;
    let indicators = compute_indicators(&series)?;
    Ok((series.len(), extract_levels(&indicators)))
}

/// Analyse `symbol` on each timeframe in turn.
///
/// A failing timeframe is reported and stored as `KeyLevels::empty()`; it
/// never stops the remaining timeframes.
pub fn analyze(
    provider: &dyn MarketDataProvider,
    reporter: &mut dyn Reporter,
    symbol: &str,
    timeframes: &[Timeframe],
    period: &Period,
) -> AnalysisResult {
    let mut result = AnalysisResult::new(symbol);

    for timeframe in timeframes {
        reporter.timeframe_started(symbol, timeframe);
        let entry = match analyze_timeframe(provider, symbol, timeframe, period) {
            Ok((points, levels)) => {
                reporter.timeframe_completed(symbol, timeframe, points, &levels);
                TimeframeLevels {
                    label: timeframe.label().to_string(),
                    levels,
                    failure: None,
                }
            }
            Err(e) => {
                reporter.timeframe_failed(symbol, timeframe, &e);
                TimeframeLevels {
                    label: timeframe.label().to_string(),
                    levels: KeyLevels::empty(),
                    failure: Some(e.to_string()),
                }
            }
        };
        result.timeframes.push(entry);
    }

    result
}
