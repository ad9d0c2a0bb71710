//! Luck-pillar (Daeun) derivation.
//!
//! The ten-year luck sequence walks the 60-cycle away from the month
//! pillar: forward for Yang-year men and Eum-year women, backward
//! otherwise. The entry age comes from the distance between birth and the
//! adjacent jeol boundary at three days per year.

use serde::{Deserialize, Serialize};

use saju_almanac::Almanac;
use saju_ganji::{Ganji, Polarity, Stem, ganji_at};
use saju_time::Instant;

use crate::config::Gender;
use crate::error::SajuError;

/// Seconds per luck year: three days.
const SECONDS_PER_LUCK_YEAR: i64 = 3 * 86_400;

/// Direction the luck sequence walks the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LuckDirection {
    Forward,
    Backward,
}

/// Orientation rule: Yang-year men and Eum-year women run forward.
pub const fn luck_direction(year_stem: Stem, gender: Gender) -> LuckDirection {
    match (year_stem.polarity(), gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Eum, Gender::Female) => {
            LuckDirection::Forward
        }
        _ => LuckDirection::Backward,
    }
}

/// One ten-year luck pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckPillar {
    pub ganji: Ganji,
    /// Korean-style age (years) at which the pillar takes effect.
    pub start_age: u32,
}

/// Derive `count` luck pillars for a birth.
///
/// The entry age is the distance to the next jeol (forward) or from the
/// previous jeol (backward), divided by three days per year and rounded
/// to the nearest year, never below one.
pub fn luck_pillars(
    almanac: &dyn Almanac,
    birth: Instant,
    year_stem: Stem,
    month: Ganji,
    gender: Gender,
    count: usize,
) -> Result<Vec<LuckPillar>, SajuError> {
    let direction = luck_direction(year_stem, gender);
    let boundary_seconds = match direction {
        LuckDirection::Forward => almanac.jeol_after(birth)?.instant.seconds_since(birth),
        LuckDirection::Backward => birth.seconds_since(almanac.jeol_before(birth)?.instant),
    };
    let entry_age =
        (((boundary_seconds + SECONDS_PER_LUCK_YEAR / 2) / SECONDS_PER_LUCK_YEAR) as u32).max(1);

    let month_index = month.cycle_index() as i64;
    let mut pillars = Vec::with_capacity(count);
    for i in 0..count {
        let step = i as i64 + 1;
        let index = match direction {
            LuckDirection::Forward => month_index + step,
            LuckDirection::Backward => month_index - step,
        };
        pillars.push(LuckPillar {
            ganji: ganji_at(index.rem_euclid(60) as u8),
            start_age: entry_age + 10 * i as u32,
        });
    }
    Ok(pillars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_rule() {
        // Gap (yang) year: men forward, women backward.
        assert_eq!(
            luck_direction(Stem::Gap, Gender::Male),
            LuckDirection::Forward
        );
        assert_eq!(
            luck_direction(Stem::Gap, Gender::Female),
            LuckDirection::Backward
        );
        // Eul (eum) year: the mirror.
        assert_eq!(
            luck_direction(Stem::Eul, Gender::Male),
            LuckDirection::Backward
        );
        assert_eq!(
            luck_direction(Stem::Eul, Gender::Female),
            LuckDirection::Forward
        );
    }
}
