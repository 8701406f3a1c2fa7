use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Reporting window for financial statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Annual,
    Quarterly,
    Ttm,
}

impl Timeframe {
    pub const ALL: [Self; 3] = [Self::Annual, Self::Quarterly, Self::Ttm];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarterly => "quarterly",
            Self::Ttm => "ttm",
        }
    }
}

impl Display for Timeframe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "annual" => Ok(Self::Annual),
            "quarterly" => Ok(Self::Quarterly),
            "ttm" => Ok(Self::Ttm),
            other => Err(ValidationError::InvalidTimeframe {
                value: other.to_owned(),
            }),
        }
    }
}

/// Bucket size for aggregate bars. Combined with a multiplier, e.g. 5 x minute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timespan {
    Minute,
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Timespan {
    pub const ALL: [Self; 7] = [
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Quarter,
        Self::Year,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

impl Display for Timespan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timespan {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|timespan| timespan.as_str() == normalized)
            .ok_or(ValidationError::InvalidTimespan { value: normalized })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_timeframe_case_insensitively() {
        assert_eq!(Timeframe::from_str(" Quarterly ").expect("must parse"), Timeframe::Quarterly);
        assert_eq!(Timeframe::default(), Timeframe::Annual);
    }

    #[test]
    fn rejects_unknown_timeframe() {
        let err = Timeframe::from_str("monthly").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTimeframe { .. }));
    }

    #[test]
    fn parses_every_timespan() {
        for timespan in Timespan::ALL {
            assert_eq!(Timespan::from_str(timespan.as_str()), Ok(timespan));
        }
        assert_eq!(Timespan::default(), Timespan::Day);
    }

    #[test]
    fn rejects_unknown_timespan() {
        let err = Timespan::from_str("1d").expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::InvalidTimespan {
                value: String::from("1d")
            }
        );
    }
}
