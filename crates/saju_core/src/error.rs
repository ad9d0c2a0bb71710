//! Error types for chart derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_almanac::AlmanacError;
use saju_ganji::GanjiError;
use saju_time::TimeError;

/// Errors from the four-pillar calculator and analyzers.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SajuError {
    /// Error from ganji text handling.
    Ganji(GanjiError),
    /// Error from civil date/time validation.
    Time(TimeError),
    /// Error from the calendrical reference tables.
    Almanac(AlmanacError),
    /// True-solar-time correction requested without a birth longitude.
    MissingLongitude,
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ganji(e) => write!(f, "ganji error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Almanac(e) => write!(f, "almanac error: {e}"),
            Self::MissingLongitude => {
                write!(f, "true solar time requested without a birth longitude")
            }
        }
    }
}

impl Error for SajuError {}

impl From<GanjiError> for SajuError {
    fn from(e: GanjiError) -> Self {
        Self::Ganji(e)
    }
}

impl From<TimeError> for SajuError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<AlmanacError> for SajuError {
    fn from(e: AlmanacError) -> Self {
        Self::Almanac(e)
    }
}
