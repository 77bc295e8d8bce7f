//! Interval codes understood by the kline provider.

use std::str::FromStr;

use binance_sdk::spot::rest_api::KlinesIntervalEnum;
use strum_macros::{Display, EnumString};

use crate::error::AnalysisError;
use crate::utils::TimeUtils;

/// Binance-style interval shorthand. Codes are case-sensitive: `1m` is a minute, `1M` a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum KlineInterval {
    #[strum(serialize = "1s")]
    OneSecond,
    #[strum(serialize = "1m")]
    OneMinute,
    #[strum(serialize = "3m")]
    ThreeMinutes,
    #[strum(serialize = "5m")]
    FiveMinutes,
    #[strum(serialize = "15m")]
    FifteenMinutes,
    #[strum(serialize = "30m")]
    ThirtyMinutes,
    #[strum(serialize = "1h")]
    OneHour,
    #[strum(serialize = "2h")]
    TwoHours,
    #[strum(serialize = "4h")]
    FourHours,
    #[strum(serialize = "6h")]
    SixHours,
    #[strum(serialize = "8h")]
    EightHours,
    #[strum(serialize = "12h")]
    TwelveHours,
    #[strum(serialize = "1d")]
    OneDay,
    #[strum(serialize = "3d")]
    ThreeDays,
    #[strum(serialize = "1w")]
    OneWeek,
    #[strum(serialize = "1M")]
    OneMonth,
}

impl KlineInterval {
    pub fn parse_code(code: &str) -> Result<Self, AnalysisError> {
        KlineInterval::from_str(code)
            .map_err(|_| AnalysisError::UnsupportedInterval(code.to_string()))
    }

    pub fn to_ms(&self) -> i64 {
        match self {
            KlineInterval::OneSecond => TimeUtils::MS_IN_S,
            KlineInterval::OneMinute => TimeUtils::MS_IN_MIN,
            KlineInterval::ThreeMinutes => TimeUtils::MS_IN_3_MIN,
            KlineInterval::FiveMinutes => TimeUtils::MS_IN_5_MIN,
            KlineInterval::FifteenMinutes => TimeUtils::MS_IN_15_MIN,
            KlineInterval::ThirtyMinutes => TimeUtils::MS_IN_30_MIN,
            KlineInterval::OneHour => TimeUtils::MS_IN_H,
            KlineInterval::TwoHours => TimeUtils::MS_IN_2_H,
            KlineInterval::FourHours => TimeUtils::MS_IN_4_H,
            KlineInterval::SixHours => TimeUtils::MS_IN_6_H,
            KlineInterval::EightHours => TimeUtils::MS_IN_8_H,
            KlineInterval::TwelveHours => TimeUtils::MS_IN_12_H,
            KlineInterval::OneDay => TimeUtils::MS_IN_D,
            KlineInterval::ThreeDays => TimeUtils::MS_IN_3_D,
            KlineInterval::OneWeek => TimeUtils::MS_IN_W,
            KlineInterval::OneMonth => TimeUtils::MS_IN_1_M,
        }
    }

    pub fn to_binance(&self) -> KlinesIntervalEnum {
        match self {
            KlineInterval::OneSecond => KlinesIntervalEnum::Interval1s,
            KlineInterval::OneMinute => KlinesIntervalEnum::Interval1m,
            KlineInterval::ThreeMinutes => KlinesIntervalEnum::Interval3m,
            KlineInterval::FiveMinutes => KlinesIntervalEnum::Interval5m,
            KlineInterval::FifteenMinutes => KlinesIntervalEnum::Interval15m,
            KlineInterval::ThirtyMinutes => KlinesIntervalEnum::Interval30m,
            KlineInterval::OneHour => KlinesIntervalEnum::Interval1h,
            KlineInterval::TwoHours => KlinesIntervalEnum::Interval2h,
            KlineInterval::FourHours => KlinesIntervalEnum::Interval4h,
            KlineInterval::SixHours => KlinesIntervalEnum::Interval6h,
            KlineInterval::EightHours => KlinesIntervalEnum::Interval8h,
            KlineInterval::TwelveHours => KlinesIntervalEnum::Interval12h,
            KlineInterval::OneDay => KlinesIntervalEnum::Interval1d,
            KlineInterval::ThreeDays => KlinesIntervalEnum::Interval3d,
            KlineInterval::OneWeek => KlinesIntervalEnum::Interval1w,
            KlineInterval::OneMonth => KlinesIntervalEnum::Interval1M,
        }
    }
}
