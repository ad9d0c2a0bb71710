//! Chart assembly: the result surface of the engine.

use serde::{Deserialize, Serialize};

use saju_almanac::{Almanac, LunarDate};
use saju_time::{CivilDate, CivilDateTime, longitude_correction_minutes};

use crate::config::{BirthInput, CalendarKind, ChartConfig};
use crate::error::SajuError;
use crate::luck::{LuckPillar, luck_pillars};
use crate::narrate::{NarrationError, Narrator};
use crate::ohaeng::{ElementBalance, element_balance};
use crate::pillars::{FourPillars, four_pillars};
use crate::sipsin::{SipsinEntry, sipsin_entries};

/// Luck pillars derived per chart when gender is given.
const LUCK_PILLAR_COUNT: usize = 8;

/// The assembled result of one chart derivation: plain data, serializable
/// as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SajuChart {
    /// Effective local solar datetime the pillars were derived from
    /// (lunar input resolved, true-solar-time correction applied).
    pub birth_local: CivilDateTime,
    pub utc_offset_minutes: i32,
    pub pillars: FourPillars,
    pub balance: ElementBalance,
    pub sipsin: Vec<SipsinEntry>,
    /// Present when the input carried a gender.
    pub luck: Option<Vec<LuckPillar>>,
    /// Optional collaborator commentary; never required for validity.
    pub narration: Option<String>,
}

impl SajuChart {
    /// Request commentary from a narration collaborator.
    ///
    /// On success the text is attached; on failure the chart is left
    /// untouched and the error is returned for reporting.
    pub fn attach_narration(&mut self, narrator: &dyn Narrator) -> Result<(), NarrationError> {
        let text = narrator.narrate(self)?;
        self.narration = Some(text);
        Ok(())
    }
}

/// Derive a complete chart for a birth input.
pub fn cast_chart(
    almanac: &dyn Almanac,
    input: &BirthInput,
    config: &ChartConfig,
) -> Result<SajuChart, SajuError> {
    let solar_date = match input.calendar {
        CalendarKind::Solar => CivilDate::new(input.year, input.month, input.day)?,
        CalendarKind::Lunar { leap } => almanac.lunar_to_solar(LunarDate {
            year: input.year,
            month: input.month,
            day: input.day,
            leap,
        })?,
    };
    let mut local = CivilDateTime::new(
        solar_date.year,
        solar_date.month,
        solar_date.day,
        input.hour,
        input.minute,
        input.second,
    )?;

    if config.true_solar_time {
        let longitude = input.longitude_deg.ok_or(SajuError::MissingLongitude)?;
        local = local.shift_minutes(longitude_correction_minutes(
            longitude,
            input.utc_offset_minutes,
        ));
    }

    let pillars = four_pillars(almanac, local, input.utc_offset_minutes, config.late_zi)?;
    let balance = element_balance(&pillars, config.hidden_tally);
    let sipsin = sipsin_entries(&pillars, config.sipsin_scope);

    let luck = match input.gender {
        Some(gender) => Some(luck_pillars(
            almanac,
            local.to_instant(input.utc_offset_minutes),
            pillars.year.stem(),
            pillars.month,
            gender,
            LUCK_PILLAR_COUNT,
        )?),
        None => None,
    };

    Ok(SajuChart {
        birth_local: local,
        utc_offset_minutes: input.utc_offset_minutes,
        pillars,
        balance,
        sipsin,
        luck,
        narration: None,
    })
}
