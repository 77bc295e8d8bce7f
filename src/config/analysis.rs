//! Analysis and computation configuration

use crate::domain::{CANONICAL_TIMEFRAMES, Period, Timeframe};

/// Moving-average windows, reported in this order as `[ma20, ma50, ma200]`.
pub struct MovingAverageSettings {
    pub windows: [usize; 3],
}

/// Settings for swing (centered rolling extrema) detection
pub struct SwingSettings {
    // Must be odd so the window is centered: 5 covers i-2..=i+2
    pub window: usize,
}

/// Settings for support/resistance extraction
pub struct LevelSettings {
    // Trailing positions scanned for support/resistance candidates
    pub lookback: usize,
    // Maximum levels reported per side
    pub num_levels: usize,
    // Trailing positions scanned for the most recent swing high/low
    pub recent_swing_lookback: usize,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub moving_averages: MovingAverageSettings,
    pub swing: SwingSettings,
    pub levels: LevelSettings,
    // Lookback requested from the provider for every timeframe
    pub default_period: Period,
    pub timeframes: &'static [Timeframe],
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    moving_averages: MovingAverageSettings {
        windows: [20, 50, 200],
    },
    swing: SwingSettings { window: 5 },
    levels: LevelSettings {
        lookback: 10,
        num_levels: 3,
        recent_swing_lookback: 5,
    },
    default_period: Period::days(30),
    timeframes: &CANONICAL_TIMEFRAMES,
};
