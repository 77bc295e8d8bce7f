//! Per-position indicators derived from a price series.

use crate::config::ANALYSIS;
use crate::error::AnalysisError;
use crate::models::{IndicatorSeries, PriceSeries};
use crate::utils::maths_utils::{centered_rolling_max, centered_rolling_min, rolling_mean};

/// Augments `series` with trailing moving averages of close and centered swing extrema.
///
/// An empty series yields an empty `IndicatorSeries`. Ragged columns or
/// non-finite prices are a `Validation` error.
pub fn compute_indicators(series: &PriceSeries) -> Result<IndicatorSeries, AnalysisError> {
    series.validate()?;
    if series.is_empty() {
        return Ok(IndicatorSeries::default());
    }

    let [fast, mid, slow] = ANALYSIS.moving_averages.windows;
    let swing_window = ANALYSIS.swing.window;

    Ok(IndicatorSeries {
        ma20: rolling_mean(&series.close_prices, fast),
        ma50: rolling_mean(&series.close_prices, mid),
        ma200: rolling_mean(&series.close_prices, slow),
        swing_high: centered_rolling_max(&series.high_prices, swing_window),
        swing_low: centered_rolling_min(&series.low_prices, swing_window),
        prices: series.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn series_from_closes(closes: &[f64]) -> PriceSeries {
        let points: Vec<PricePoint> = closes
            .iter()
            .map(|&c| PricePoint::new(c, c + 1.0, c - 1.0, c, 1.0))
            .collect();
        PriceSeries::from_points(&points)
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let out = compute_indicators(&PriceSeries::new()).unwrap();
        assert!(out.is_empty());
        assert!(out.ma20.is_empty());
        assert!(out.swing_low.is_empty());
    }

    #[test]
    fn short_series_has_no_moving_averages() {
        let closes: Vec<f64> = (0..19).map(|i| 100.0 + i as f64).collect();
        let out = compute_indicators(&series_from_closes(&closes)).unwrap();
        assert_eq!(out.len(), 19);
        assert!(out.ma20.iter().all(Option::is_none));
        assert!(out.ma50.iter().all(Option::is_none));
        assert!(out.ma200.iter().all(Option::is_none));
    }

    #[test]
    fn moving_average_starts_at_window_end() {
        let closes: Vec<f64> = (1..=25).map(|i| i as f64).collect();
        let out = compute_indicators(&series_from_closes(&closes)).unwrap();
        assert_eq!(out.ma20[18], None);
        // mean(1..=20) = 10.5
        assert!(approx_eq(out.ma20[19].unwrap(), 10.5));
        // mean(6..=25) = 15.5
        assert!(approx_eq(out.ma20[24].unwrap(), 15.5));
        assert!(out.ma50.iter().all(Option::is_none));
    }

    #[test]
    fn constant_close_gives_constant_averages() {
        let closes = vec![42.5; 230];
        let out = compute_indicators(&series_from_closes(&closes)).unwrap();
        for (i, ma) in [&out.ma20, &out.ma50, &out.ma200].iter().enumerate() {
            let window = [20, 50, 200][i];
            for (pos, value) in ma.iter().enumerate() {
                if pos + 1 >= window {
                    assert!(approx_eq(value.unwrap(), 42.5), "ma{} at {}", window, pos);
                } else {
                    assert_eq!(*value, None);
                }
            }
        }
    }

    #[test]
    fn swing_low_uses_centered_window() {
        let lows = [10.0, 9.0, 8.0, 9.0, 10.0, 11.0, 12.0, 11.0, 10.0, 9.0];
        let points: Vec<PricePoint> = lows
            .iter()
            .map(|&l| PricePoint::new(l + 0.5, l + 1.0, l, l + 0.5, 1.0))
            .collect();
        let out = compute_indicators(&PriceSeries::from_points(&points)).unwrap();

        assert_eq!(out.swing_low[4], Some(8.0));
        assert_eq!(out.swing_low[0], None);
        assert_eq!(out.swing_low[1], None);
        assert_eq!(out.swing_low[8], None);
        assert_eq!(out.swing_low[9], None);
        // highs are lows + 1, window [4..=8] peaks at 12 + 1
        assert_eq!(out.swing_high[6], Some(13.0));
    }

    #[test]
    fn swing_high_never_below_swing_low() {
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + ((i * 7) % 13) as f64 - ((i * 3) % 5) as f64)
            .collect();
        let out = compute_indicators(&series_from_closes(&closes)).unwrap();
        for (hi, lo) in out.swing_high.iter().zip(out.swing_low.iter()) {
            if let (Some(hi), Some(lo)) = (hi, lo) {
                assert!(hi >= lo);
            }
        }
    }

    #[test]
    fn malformed_series_is_a_validation_error() {
        let mut series = series_from_closes(&[1.0, 2.0, 3.0]);
        series.high_prices.push(4.0);
        assert!(matches!(
            compute_indicators(&series),
            Err(AnalysisError::Validation(_))
        ));
    }

    #[test]
    fn ragged_series_without_closes_is_not_empty() {
        let series = PriceSeries {
            open_prices: vec![1.0, 2.0],
            high_prices: vec![1.5],
            ..PriceSeries::default()
        };
        assert!(series.is_empty());
        assert!(matches!(
            compute_indicators(&series),
            Err(AnalysisError::Validation(_))
        ));
    }
}
