use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;
use crate::utils::TimeUtils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodUnit {
    Hour,
    Day,
    Week,
}

impl PeriodUnit {
    fn suffix(&self) -> &'static str {
        match self {
            PeriodUnit::Hour => "h",
            PeriodUnit::Day => "d",
            PeriodUnit::Week => "w",
        }
    }

    fn ms(&self) -> i64 {
        match self {
            PeriodUnit::Hour => TimeUtils::MS_IN_H,
            PeriodUnit::Day => TimeUtils::MS_IN_D,
            PeriodUnit::Week => TimeUtils::MS_IN_W,
        }
    }
}

/// How far back from now the provider should fetch, e.g. `30d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub amount: u32,
    pub unit: PeriodUnit,
}

impl Period {
    pub const fn days(amount: u32) -> Self {
        Period {
            amount,
            unit: PeriodUnit::Day,
        }
    }

    pub fn duration_ms(&self) -> i64 {
        self.amount as i64 * self.unit.ms()
    }
}

impl FromStr for Period {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split_at = s
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| AnalysisError::Validation(format!("period '{}' has no unit", s)))?;
        let (digits, suffix) = s.split_at(split_at);
        let amount: u32 = digits
            .parse()
            .map_err(|_| AnalysisError::Validation(format!("period '{}' has no amount", s)))?;
        if amount == 0 {
            return Err(AnalysisError::Validation(format!(
                "period '{}' must be positive",
                s
            )));
        }
        let unit = match suffix.to_ascii_lowercase().as_str() {
            "h" => PeriodUnit::Hour,
            "d" => PeriodUnit::Day,
            "w" | "wk" => PeriodUnit::Week,
            other => {
                return Err(AnalysisError::Validation(format!(
                    "unknown period unit '{}'",
                    other
                )));
            }
        };
        Ok(Period { amount, unit })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_canonical_form() {
        let p: Period = "30d".parse().unwrap();
        assert_eq!(p, Period::days(30));
        assert_eq!(p.to_string(), "30d");
        assert_eq!(p.duration_ms(), 30 * TimeUtils::MS_IN_D);

        let w: Period = "2WK".parse().unwrap();
        assert_eq!(w.to_string(), "2w");
    }

    #[test]
    fn rejects_malformed_periods() {
        assert!("30".parse::<Period>().is_err());
        assert!("d".parse::<Period>().is_err());
        assert!("0d".parse::<Period>().is_err());
        assert!("5y".parse::<Period>().is_err());
    }
}
