//! Hour-pair intervals parsed from `"H:H"` strings.
//!
//! The same format describes both a query's time band and a record's
//! `purchase_time`; both sides go through [`Interval::from_str`].

use std::str::FromStr;

use thiserror::Error;

/// Error parsing an `"H:H"` hour pair.
#[derive(Debug, Error)]
pub enum IntervalParseError {
    /// The string does not split into exactly two `:`-separated parts.
    #[error("invalid interval format: {0:?}")]
    Format(String),

    /// One of the parts is not a base-10 integer.
    #[error("invalid hour {value:?} in interval")]
    Hour {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// A pair of hours parsed from an `"H:H"` string.
///
/// No `start <= end` ordering is enforced; the raw parsed values are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    /// Whether `hour` falls inside this interval, bounds included.
    pub fn covers_hour(&self, hour: i64) -> bool {
        hour >= self.start && hour <= self.end
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (start, end) = match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) => (start, end),
            _ => return Err(IntervalParseError::Format(s.to_string())),
        };

        let parse_hour = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|source| IntervalParseError::Hour {
                    value: part.to_string(),
                    source,
                })
        };

        Ok(Interval {
            start: parse_hour(start)?,
            end: parse_hour(end)?,
        })
    }
}
