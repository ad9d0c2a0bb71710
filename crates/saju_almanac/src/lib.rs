//! Read-only calendrical reference data behind a narrow query interface.
//!
//! This crate provides:
//! - The 24 solar terms and their month-branch associations
//! - `TermTable`, the parsed solar-term boundary table
//! - `LunarTable`, the parsed lunar month table with lunar ↔ solar
//!   conversion
//! - The [`Almanac`] trait, the injected lookup dependency the pillar
//!   calculator consumes; any storage can sit behind it, and a fixed
//!   in-memory table substitutes for the real source in tests
//!
//! The tables are finite and never extrapolated: out-of-range queries
//! fail with [`AlmanacError`].

pub mod error;
pub mod lunar;
pub mod solar_term;
pub mod term_table;

use std::path::Path;

use saju_time::{CivilDate, Instant};

pub use error::AlmanacError;
pub use lunar::{LunarDate, LunarMonthRecord, LunarTable};
pub use solar_term::{ALL_TERMS, SolarTerm, SolarTermEvent};
pub use term_table::TermTable;

/// Read-only query capabilities of the calendrical reference data.
///
/// All methods are independent point/range queries against immutable
/// data; implementations hold no per-call state.
pub trait Almanac {
    /// The solar-term event whose `[entry, next entry)` interval contains
    /// `instant`.
    fn term_containing(&self, instant: Instant) -> Result<SolarTermEvent, AlmanacError>;

    /// Point query for the (year, term) entry.
    fn term_event(&self, year: i32, term: SolarTerm) -> Result<SolarTermEvent, AlmanacError>;

    /// The first month-opening (jeol) entry strictly after `instant`.
    fn jeol_after(&self, instant: Instant) -> Result<SolarTermEvent, AlmanacError>;

    /// The last month-opening (jeol) entry at or before `instant`.
    fn jeol_before(&self, instant: Instant) -> Result<SolarTermEvent, AlmanacError>;

    /// Solar equivalent of a lunar date.
    fn lunar_to_solar(&self, lunar: LunarDate) -> Result<CivilDate, AlmanacError>;

    /// Lunar equivalent of a solar date.
    fn solar_to_lunar(&self, date: CivilDate) -> Result<LunarDate, AlmanacError>;
}

/// An [`Almanac`] backed by parsed in-memory tables.
#[derive(Debug, Clone)]
pub struct TableAlmanac {
    terms: TermTable,
    lunar: LunarTable,
}

impl TableAlmanac {
    /// Assemble from already-parsed tables.
    pub fn new(terms: TermTable, lunar: LunarTable) -> Self {
        Self { terms, lunar }
    }

    /// Load both tables from files.
    pub fn load(term_path: &Path, lunar_path: &Path) -> Result<Self, AlmanacError> {
        let term_text = std::fs::read_to_string(term_path)?;
        let lunar_text = std::fs::read_to_string(lunar_path)?;
        Self::parse(&term_text, &lunar_text)
    }

    /// Parse both tables from text content.
    pub fn parse(term_text: &str, lunar_text: &str) -> Result<Self, AlmanacError> {
        Ok(Self {
            terms: TermTable::parse(term_text)?,
            lunar: LunarTable::parse(lunar_text)?,
        })
    }

    /// The underlying term table.
    pub fn terms(&self) -> &TermTable {
        &self.terms
    }

    /// The underlying lunar table.
    pub fn lunar(&self) -> &LunarTable {
        &self.lunar
    }
}

impl Almanac for TableAlmanac {
    fn term_containing(&self, instant: Instant) -> Result<SolarTermEvent, AlmanacError> {
        self.terms.term_containing(instant)
    }

    fn term_event(&self, year: i32, term: SolarTerm) -> Result<SolarTermEvent, AlmanacError> {
        self.terms.term_event(year, term)
    }

    fn jeol_after(&self, instant: Instant) -> Result<SolarTermEvent, AlmanacError> {
        self.terms.jeol_after(instant)
    }

    fn jeol_before(&self, instant: Instant) -> Result<SolarTermEvent, AlmanacError> {
        self.terms.jeol_before(instant)
    }

    fn lunar_to_solar(&self, lunar: LunarDate) -> Result<CivilDate, AlmanacError> {
        self.lunar.lunar_to_solar(lunar)
    }

    fn solar_to_lunar(&self, date: CivilDate) -> Result<LunarDate, AlmanacError> {
        self.lunar.solar_to_lunar(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_time::CivilDateTime;

    const TERMS: &str = "\
ipchun      2024-02-04  08:27:00
usu         2024-02-19  04:13:00
gyeongchip  2024-03-05  02:23:00
";

    const LUNAR: &str = "\
2024 1 - 2024-02-10 29
2024 2 - 2024-03-10 30
";

    #[test]
    fn parse_and_query_through_trait() {
        let almanac = TableAlmanac::parse(TERMS, LUNAR).unwrap();
        let source: &dyn Almanac = &almanac;

        let q = CivilDateTime::new(2024, 2, 10, 0, 0, 0)
            .unwrap()
            .to_instant(0);
        assert_eq!(source.term_containing(q).unwrap().term, SolarTerm::Ipchun);

        let solar = source
            .lunar_to_solar(LunarDate {
                year: 2024,
                month: 1,
                day: 1,
                leap: false,
            })
            .unwrap();
        assert_eq!(solar, CivilDate::new(2024, 2, 10).unwrap());
    }
}
