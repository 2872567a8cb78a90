//! Day / month / year cost projections

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const HOURS_PER_DAY: f64 = 24.0;

/// Fraction of the year that counts as business days (5 of every 7).
pub const WEEKDAY_FRACTION: f64 = 5.0 / 7.0;

/// Cost over a day, a month and a year, in USD.
///
/// Values keep full precision. Use [`CostProjection::rounded`] or the
/// `Display` impl for presentation; both round to cents and print the
/// shortest form of the result (`2.3`, not `2.30`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostProjection {
    pub per_day: f64,
    pub per_month: f64,
    pub per_year: f64,
}

impl CostProjection {
    /// Project a daily cost over business days only.
    ///
    /// Used for LLM usage, which is assumed to happen on weekdays.
    pub fn weekdays(per_day: f64) -> Self {
        let per_year = per_day * DAYS_PER_YEAR * WEEKDAY_FRACTION;
        Self {
            per_day,
            per_month: per_year / MONTHS_PER_YEAR,
            per_year,
        }
    }

    /// Project a daily cost over every day of the year.
    ///
    /// Used for vector stores, which are billed around the clock.
    pub fn full_year(per_day: f64) -> Self {
        let per_year = per_day * DAYS_PER_YEAR;
        Self {
            per_day,
            per_month: per_year / MONTHS_PER_YEAR,
            per_year,
        }
    }

    /// Copy with every value rounded to cents.
    pub fn rounded(&self) -> Self {
        Self {
            per_day: round_cents(self.per_day),
            per_month: round_cents(self.per_month),
            per_year: round_cents(self.per_year),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.per_day == 0.0 && self.per_month == 0.0 && self.per_year == 0.0
    }
}

impl fmt::Display for CostProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        writeln!(f, "Cost Per Day: {} $", rounded.per_day)?;
        writeln!(f, "Cost Per Month: {} $", rounded.per_month)?;
        write!(f, "Cost Per Year: {} $", rounded.per_year)
    }
}

/// Round to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
