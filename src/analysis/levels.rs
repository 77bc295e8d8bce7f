//! Support/resistance, moving-average and swing summaries for one timeframe.

use itertools::Itertools;

use crate::config::ANALYSIS;
use crate::domain::KeyLevels;
use crate::models::IndicatorSeries;
use crate::models::timeseries::tail_values;
use crate::utils::maths_utils::{get_max, get_min};

/// Lowest distinct swing lows in the trailing window, ascending.
pub fn find_support_levels(series: &IndicatorSeries, num_levels: usize) -> Vec<f64> {
    tail_values(&series.swing_low, ANALYSIS.levels.lookback)
        .into_iter()
        .sorted_by(|a, b| a.total_cmp(b))
        .dedup()
        .take(num_levels)
        .collect()
}

/// Highest distinct swing highs in the trailing window, descending.
pub fn find_resistance_levels(series: &IndicatorSeries, num_levels: usize) -> Vec<f64> {
    tail_values(&series.swing_high, ANALYSIS.levels.lookback)
        .into_iter()
        .sorted_by(|a, b| b.total_cmp(a))
        .dedup()
        .take(num_levels)
        .collect()
}

pub fn extract_levels(series: &IndicatorSeries) -> KeyLevels {
    let num_levels = ANALYSIS.levels.num_levels;
    let recent = ANALYSIS.levels.recent_swing_lookback;

    KeyLevels {
        support_levels: find_support_levels(series, num_levels),
        resistance_levels: find_resistance_levels(series, num_levels),
        moving_averages: series.last_moving_averages(),
        recent_swing_high: get_max(&tail_values(&series.swing_high, recent)),
        recent_swing_low: get_min(&tail_values(&series.swing_low, recent)),
        last_close: series.prices.last_close(),
    }
}
