//! Error types for almanac table access.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_time::{CivilDate, Instant};

use crate::lunar::LunarDate;
use crate::solar_term::SolarTerm;

/// Errors from loading or querying the calendrical reference tables.
///
/// The tables are finite; a query outside their range is reported, never
/// approximated.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AlmanacError {
    /// Table file could not be read.
    Io(String),
    /// Table text could not be parsed.
    Parse(String),
    /// No term interval covers the queried instant.
    TermOutOfRange(Instant),
    /// The queried (year, term) entry is not in the table.
    TermMissing { year: i32, term: SolarTerm },
    /// The queried solar date is outside the lunar table.
    SolarOutOfRange(CivilDate),
    /// The queried lunar year is outside the lunar table.
    LunarOutOfRange { year: i32 },
    /// The queried lunar date does not exist (short month, or a leap
    /// month that never occurred).
    InvalidLunarDate(LunarDate),
}

impl Display for AlmanacError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "table parse error: {msg}"),
            Self::TermOutOfRange(instant) => write!(
                f,
                "instant {}s past epoch is outside the solar-term table",
                instant.as_seconds()
            ),
            Self::TermMissing { year, term } => {
                write!(f, "no {} entry for year {year} in the table", term.name())
            }
            Self::SolarOutOfRange(date) => {
                write!(f, "solar date {date} is outside the lunar table")
            }
            Self::LunarOutOfRange { year } => {
                write!(f, "lunar year {year} is outside the lunar table")
            }
            Self::InvalidLunarDate(date) => {
                write!(f, "lunar date {date} does not exist")
            }
        }
    }
}

impl Error for AlmanacError {}

impl From<std::io::Error> for AlmanacError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
