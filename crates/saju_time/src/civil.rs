//! Validated civil calendar types.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{EPOCH_JDN, civil_to_jdn, days_in_month, jdn_to_civil};
use crate::{Instant, SECONDS_PER_DAY};

/// A Gregorian calendar date.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Build a date, rejecting impossible month/day combinations.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let dim = days_in_month(year, month);
        if dim == 0 || day == 0 || day > dim {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Julian day number of this date.
    pub const fn jdn(self) -> i64 {
        civil_to_jdn(self.year, self.month, self.day)
    }

    /// Date from a Julian day number.
    pub const fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_civil(jdn);
        Self { year, month, day }
    }

    /// The date `n` days later (negative for earlier).
    pub const fn plus_days(self, n: i64) -> Self {
        Self::from_jdn(self.jdn() + n)
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A Gregorian calendar date with whole-second time of day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CivilDateTime {
    pub date: CivilDate,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilDateTime {
    /// Build a datetime, rejecting impossible dates and times.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        let date = CivilDate::new(year, month, day)?;
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
        })
    }

    /// Seconds since local midnight.
    pub const fn seconds_of_day(self) -> i64 {
        self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }

    /// The instant this local datetime denotes, given its UTC offset.
    pub const fn to_instant(self, utc_offset_minutes: i32) -> Instant {
        let local = (self.date.jdn() - EPOCH_JDN) * SECONDS_PER_DAY + self.seconds_of_day();
        Instant::from_seconds(local - utc_offset_minutes as i64 * 60)
    }

    /// The local datetime denoting `instant` under the given UTC offset.
    pub const fn from_instant(instant: Instant, utc_offset_minutes: i32) -> Self {
        let local = instant.as_seconds() + utc_offset_minutes as i64 * 60;
        let days = local.div_euclid(SECONDS_PER_DAY);
        let secs = local.rem_euclid(SECONDS_PER_DAY);
        Self {
            date: CivilDate::from_jdn(EPOCH_JDN + days),
            hour: (secs / 3600) as u32,
            minute: ((secs % 3600) / 60) as u32,
            second: (secs % 60) as u32,
        }
    }

    /// The datetime `delta` minutes later (negative for earlier), rolling
    /// the date as needed.
    pub const fn shift_minutes(self, delta: i64) -> Self {
        let total = (self.date.jdn() - EPOCH_JDN) * SECONDS_PER_DAY
            + self.seconds_of_day()
            + delta * 60;
        let days = total.div_euclid(SECONDS_PER_DAY);
        let secs = total.rem_euclid(SECONDS_PER_DAY);
        Self {
            date: CivilDate::from_jdn(EPOCH_JDN + days),
            hour: (secs / 3600) as u32,
            minute: ((secs % 3600) / 60) as u32,
            second: (secs % 60) as u32,
        }
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}",
            self.date, self.hour, self.minute, self.second
        )
    }
}
