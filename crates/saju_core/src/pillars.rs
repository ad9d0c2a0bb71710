//! Four-pillar derivation.
//!
//! Year and month pillars turn on solar-term boundaries, never on civil
//! month numbers: the year rolls at the exact Ipchun entry instant (at or
//! after the instant belongs to the new year), and each month opens at its
//! jeol term. The day pillar is pure day-count arithmetic on the Julian
//! day number; the hour pillar partitions the day into twelve two-hour
//! slots opening at 23:00.

use serde::{Deserialize, Serialize};

use saju_almanac::{Almanac, SolarTerm};
use saju_ganji::{Branch, Ganji, Stem, ganji_at};
use saju_time::{CivilDate, CivilDateTime};

use crate::config::LateZiRule;
use crate::error::SajuError;

/// Gregorian year whose ganji is Gapja (cycle index 0).
pub const YEAR_ANCHOR: i32 = 1984;

/// Day-count offset: `(JDN + 49) mod 60` is the day's cycle index
/// (JDN 11 was a Gapja day; 1912-02-18 and 2000-01-01 = Muo pin it).
pub const DAY_ANCHOR_OFFSET: i64 = 49;

/// The four temporal slots of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarKind {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// The four pillars of a birth instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Ganji,
    pub month: Ganji,
    pub day: Ganji,
    pub hour: Ganji,
}

impl FourPillars {
    /// The Day Stem (ilgan), the reference point of all relational analysis.
    pub const fn day_stem(self) -> Stem {
        self.day.stem()
    }

    /// Pillars in Year/Month/Day/Hour order.
    pub const fn in_order(self) -> [(PillarKind, Ganji); 4] {
        [
            (PillarKind::Year, self.year),
            (PillarKind::Month, self.month),
            (PillarKind::Day, self.day),
            (PillarKind::Hour, self.hour),
        ]
    }
}

/// Pair a stem and branch whose parity is known to agree.
///
/// The month/hour stem formulas always land on the branch's parity, so the
/// cycle lookup is exact; the debug assertion guards the invariant.
fn pair(stem_index: u8, branch_index: u8) -> Ganji {
    let cycle = ((6 * stem_index as u16 + 55 * branch_index as u16) % 60) as u8;
    let ganji = ganji_at(cycle);
    debug_assert_eq!(ganji.stem().index(), stem_index % 10);
    debug_assert_eq!(ganji.branch().index(), branch_index % 12);
    ganji
}

/// Year pillar for a local birth datetime.
///
/// The boundary is the Ipchun entry instant of the local civil year, not
/// January 1: an instant at or after Ipchun belongs to that year, an
/// instant before it belongs to the previous year.
pub fn year_pillar(
    almanac: &dyn Almanac,
    local: CivilDateTime,
    utc_offset_minutes: i32,
) -> Result<Ganji, SajuError> {
    let instant = local.to_instant(utc_offset_minutes);
    let ipchun = almanac.term_event(local.date.year, SolarTerm::Ipchun)?;
    let saju_year = if instant >= ipchun.instant {
        local.date.year
    } else {
        local.date.year - 1
    };
    Ok(ganji_at((saju_year - YEAR_ANCHOR).rem_euclid(60) as u8))
}

/// Month pillar for a local birth datetime under a given year stem.
///
/// The branch comes from the governing solar term; the stem from the
/// five-tigers rule keyed on the year stem.
pub fn month_pillar(
    almanac: &dyn Almanac,
    year_stem: Stem,
    local: CivilDateTime,
    utc_offset_minutes: i32,
) -> Result<Ganji, SajuError> {
    let instant = local.to_instant(utc_offset_minutes);
    let event = almanac.term_containing(instant)?;
    let branch = event.month_branch();
    let month_offset = (branch.index() + 10) % 12; // ordinal counted from In
    let stem_index = ((year_stem.index() % 5) * 2 + 2 + month_offset) % 10;
    Ok(pair(stem_index, branch.index()))
}

/// Day pillar of a local calendar date (after any late-Ja roll).
pub fn day_pillar(date: CivilDate) -> Ganji {
    ganji_at((date.jdn() + DAY_ANCHOR_OFFSET).rem_euclid(60) as u8)
}

/// Hour branch of a local clock hour: Ja opens at 23:00, each branch
/// spans two hours.
pub const fn hour_branch(hour: u32) -> Branch {
    Branch::at((((hour + 1) / 2) % 12) as u8)
}

/// Hour pillar from the (possibly rolled) day stem and local clock hour.
///
/// The stem follows the five-rats rule keyed on the day stem.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Ganji {
    let branch = hour_branch(hour);
    let stem_index = ((day_stem.index() % 5) * 2 + branch.index()) % 10;
    pair(stem_index, branch.index())
}

/// Derive all four pillars for a local birth datetime.
///
/// `local` must already be on the solar calendar and carry any
/// true-solar-time correction; `late_zi` pins the 23:00–23:59 convention.
pub fn four_pillars(
    almanac: &dyn Almanac,
    local: CivilDateTime,
    utc_offset_minutes: i32,
    late_zi: LateZiRule,
) -> Result<FourPillars, SajuError> {
    let year = year_pillar(almanac, local, utc_offset_minutes)?;
    let month = month_pillar(almanac, year.stem(), local, utc_offset_minutes)?;

    let day_date = match late_zi {
        LateZiRule::NextDay if local.hour == 23 => local.date.plus_days(1),
        _ => local.date,
    };
    let day = day_pillar(day_date);
    let hour = hour_pillar(day.stem(), local.hour);

    Ok(FourPillars {
        year,
        month,
        day,
        hour,
    })
}
