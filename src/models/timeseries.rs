use serde::Serialize;

use crate::domain::PricePoint;
use crate::error::AnalysisError;

// ============================================================================
// PriceSeries: raw OHLC data for one symbol/timeframe, oldest first
// ============================================================================

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    // Prices
    pub open_prices: Vec<f64>,
    pub high_prices: Vec<f64>,
    pub low_prices: Vec<f64>,
    pub close_prices: Vec<f64>,

    // Volumes
    pub volumes: Vec<f64>,
}

impl PriceSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: &[PricePoint]) -> Self {
        let mut series = PriceSeries::default();
        for point in points {
            series.push(*point);
        }
        series
    }

    pub fn push(&mut self, point: PricePoint) {
        self.open_prices.push(point.open);
        self.high_prices.push(point.high);
        self.low_prices.push(point.low);
        self.close_prices.push(point.close);
        self.volumes.push(point.volume);
    }

    pub fn len(&self) -> usize {
        self.close_prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_point(&self, idx: usize) -> Option<PricePoint> {
        Some(PricePoint::new(
            *self.open_prices.get(idx)?,
            *self.high_prices.get(idx)?,
            *self.low_prices.get(idx)?,
            *self.close_prices.get(idx)?,
            self.volumes.get(idx).copied().unwrap_or(0.0),
        ))
    }

    pub fn last_close(&self) -> Option<f64> {
        self.close_prices.last().copied()
    }

    /// Every column must line up and every price must be finite.
    /// An empty series is valid.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let n = self.len();
        let columns = [
            ("open", self.open_prices.len()),
            ("high", self.high_prices.len()),
            ("low", self.low_prices.len()),
            ("volume", self.volumes.len()),
        ];
        for (name, len) in columns {
            if len != n {
                return Err(AnalysisError::Validation(format!(
                    "{} column has {} values but close has {}",
                    name, len, n
                )));
            }
        }
        for idx in 0..n {
            // Lengths were checked above, so every index resolves.
            if let Some(point) = self.get_point(idx) {
                if !point.is_finite() {
                    return Err(AnalysisError::Validation(format!(
                        "non-finite price at position {}",
                        idx
                    )));
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// IndicatorSeries: PriceSeries plus per-position derived columns
// ============================================================================

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct IndicatorSeries {
    pub prices: PriceSeries,

    // Trailing simple moving averages of close
    pub ma20: Vec<Option<f64>>,
    pub ma50: Vec<Option<f64>>,
    pub ma200: Vec<Option<f64>>,

    // Centered rolling max of high / min of low
    pub swing_high: Vec<Option<f64>>,
    pub swing_low: Vec<Option<f64>>,
}

impl IndicatorSeries {
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// `[ma20, ma50, ma200]` at the last position.
    pub fn last_moving_averages(&self) -> [Option<f64>; 3] {
        [
            last_value(&self.ma20),
            last_value(&self.ma50),
            last_value(&self.ma200),
        ]
    }
}

fn last_value(column: &[Option<f64>]) -> Option<f64> {
    column.last().copied().flatten()
}

/// The defined values among the last `n` entries of `column`, oldest first.
pub fn tail_values(column: &[Option<f64>], n: usize) -> Vec<f64> {
    let start = column.len().saturating_sub(n);
    column[start..].iter().flatten().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> PriceSeries {
        PriceSeries::from_points(&[
            PricePoint::new(10.0, 11.0, 9.0, 10.5, 100.0),
            PricePoint::new(10.5, 12.0, 10.0, 11.5, 120.0),
            PricePoint::new(11.5, 11.8, 10.9, 11.0, 90.0),
        ])
    }

    #[test]
    fn columns_follow_points() {
        let series = sample_series();
        assert_eq!(series.len(), 3);
        assert_eq!(series.high_prices, vec![11.0, 12.0, 11.8]);
        assert_eq!(series.last_close(), Some(11.0));
        assert_eq!(
            series.get_point(1),
            Some(PricePoint::new(10.5, 12.0, 10.0, 11.5, 120.0))
        );
        assert_eq!(series.get_point(3), None);
        assert!(series.validate().is_ok());
    }

    #[test]
    fn empty_series_is_valid() {
        let series = PriceSeries::new();
        assert!(series.is_empty());
        assert_eq!(series.last_close(), None);
        assert!(series.validate().is_ok());
    }

    #[test]
    fn ragged_columns_are_rejected() {
        let mut series = sample_series();
        series.low_prices.pop();
        let err = series.validate().unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
        assert!(err.to_string().contains("low column"));
    }

    #[test]
    fn nan_price_is_rejected() {
        let mut series = sample_series();
        series.close_prices[1] = f64::NAN;
        assert!(matches!(
            series.validate(),
            Err(AnalysisError::Validation(_))
        ));
    }

    #[test]
    fn tail_values_skips_missing() {
        let column = vec![Some(1.0), None, Some(3.0), None, Some(5.0)];
        assert_eq!(tail_values(&column, 3), vec![3.0, 5.0]);
        assert_eq!(tail_values(&column, 10), vec![1.0, 3.0, 5.0]);
        assert!(tail_values(&[], 3).is_empty());
    }
}
