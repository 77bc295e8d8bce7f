use serde::Serialize;

/// Descriptive price levels for one timeframe.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct KeyLevels {
    /// Strictly ascending.
    pub support_levels: Vec<f64>,
    /// Strictly descending.
    pub resistance_levels: Vec<f64>,
    /// `[ma20, ma50, ma200]` at the last position.
    pub moving_averages: [Option<f64>; 3],
    pub recent_swing_high: Option<f64>,
    pub recent_swing_low: Option<f64>,
    pub last_close: Option<f64>,
}

impl KeyLevels {
    /// The marker stored for a timeframe that produced nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_marker() {
        let levels = KeyLevels::empty();
        assert!(levels.is_empty());
        assert_eq!(levels.moving_averages, [None, None, None]);

        let populated = KeyLevels {
            recent_swing_low: Some(1.0),
            ..KeyLevels::empty()
        };
        assert!(!populated.is_empty());
    }

    #[test]
    fn absent_values_serialize_as_null() {
        let json = serde_json::to_value(KeyLevels::empty()).unwrap();
        assert_eq!(json["moving_averages"], serde_json::json!([null, null, null]));
        assert!(json["recent_swing_high"].is_null());
        assert_eq!(json["support_levels"], serde_json::json!([]));
    }
}
