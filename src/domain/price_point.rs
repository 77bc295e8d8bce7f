use serde::Serialize;

/// One OHLC observation. Its place in time is implied by its position in a `PriceSeries`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,

    // Carried through from the provider; the level logic does not read it.
    pub volume: f64,
}

impl PricePoint {
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        PricePoint {
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// True when every price field is a real number.
    pub fn is_finite(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|p| p.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_price_is_not_finite() {
        assert!(PricePoint::new(1.0, 2.0, 0.5, 1.5, 10.0).is_finite());
        assert!(!PricePoint::new(1.0, f64::NAN, 0.5, 1.5, 10.0).is_finite());
        assert!(!PricePoint::new(1.0, 2.0, f64::NEG_INFINITY, 1.5, 10.0).is_finite());
    }
}
