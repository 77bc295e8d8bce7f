use std::fmt;

/// A display label paired with the interval code the provider understands.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Timeframe {
    pub label: &'static str,
    pub interval_code: &'static str,
}

impl Timeframe {
    pub const fn new(label: &'static str, interval_code: &'static str) -> Self {
        Timeframe {
            label,
            interval_code,
        }
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn interval_code(&self) -> &str {
        self.interval_code
    }
}

/// Daily, hourly, 15-minute and 1-minute, in reporting order.
pub const CANONICAL_TIMEFRAMES: [Timeframe; 4] = [
    Timeframe::new("1D", "1d"),
    Timeframe::new("1H", "1h"),
    Timeframe::new("15M", "15m"),
    Timeframe::new("1M", "1m"),
];

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.interval_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_and_labels() {
        let labels: Vec<&str> = CANONICAL_TIMEFRAMES.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["1D", "1H", "15M", "1M"]);
        assert_eq!(CANONICAL_TIMEFRAMES[2].interval_code(), "15m");
        assert_eq!(CANONICAL_TIMEFRAMES[3].to_string(), "1M (1m)");
    }
}
