//! Solar-term boundary table: parsing and interval queries.
//!
//! The table is a line-oriented text file, one entry per line:
//!
//! ```text
//! # term        date(UTC)   time(UTC)
//! ipchun        2024-02-04  08:27:00
//! usu           2024-02-19  04:13:00
//! ```
//!
//! `#` starts a comment; blank lines are skipped. Entries must be strictly
//! increasing in time and cyclic in term order.

use saju_time::{CivilDateTime, Instant};

use crate::error::AlmanacError;
use crate::solar_term::{SolarTerm, SolarTermEvent};

/// Sorted, validated solar-term boundary table.
#[derive(Debug, Clone)]
pub struct TermTable {
    events: Vec<SolarTermEvent>,
}

impl TermTable {
    /// Parse a term table from its text content.
    pub fn parse(content: &str) -> Result<Self, AlmanacError> {
        let mut events = Vec::new();
        for (lineno, line) in content.lines().enumerate() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let event = parse_line(line)
                .map_err(|msg| AlmanacError::Parse(format!("line {}: {msg}", lineno + 1)))?;
            events.push(event);
        }
        if events.is_empty() {
            return Err(AlmanacError::Parse("term table has no entries".into()));
        }
        validate(&events)?;
        Ok(Self { events })
    }

    /// All events in entry order.
    pub fn events(&self) -> &[SolarTermEvent] {
        &self.events
    }

    /// The event whose `[entry, next entry)` interval contains `instant`.
    ///
    /// The interval after the final entry is unbounded and therefore not
    /// covered: querying past the last entry is out of range.
    pub fn term_containing(&self, instant: Instant) -> Result<SolarTermEvent, AlmanacError> {
        let idx = self
            .events
            .partition_point(|e| e.instant <= instant);
        if idx == 0 || idx == self.events.len() {
            return Err(AlmanacError::TermOutOfRange(instant));
        }
        Ok(self.events[idx - 1])
    }

    /// Point query for a (year, term) entry.
    pub fn term_event(&self, year: i32, term: SolarTerm) -> Result<SolarTermEvent, AlmanacError> {
        self.events
            .iter()
            .find(|e| e.year == year && e.term == term)
            .copied()
            .ok_or(AlmanacError::TermMissing { year, term })
    }

    /// The first jeol entry strictly after `instant`.
    pub fn jeol_after(&self, instant: Instant) -> Result<SolarTermEvent, AlmanacError> {
        self.events
            .iter()
            .find(|e| e.term.is_jeol() && e.instant > instant)
            .copied()
            .ok_or(AlmanacError::TermOutOfRange(instant))
    }

    /// The last jeol entry at or before `instant`.
    pub fn jeol_before(&self, instant: Instant) -> Result<SolarTermEvent, AlmanacError> {
        self.events
            .iter()
            .rev()
            .find(|e| e.term.is_jeol() && e.instant <= instant)
            .copied()
            .ok_or(AlmanacError::TermOutOfRange(instant))
    }
}

fn parse_line(line: &str) -> Result<SolarTermEvent, String> {
    let mut fields = line.split_whitespace();
    let (Some(name), Some(date), Some(time), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(format!("expected `term date time`, got {line:?}"));
    };

    let term = SolarTerm::from_name(name).ok_or_else(|| format!("unknown term {name:?}"))?;

    let (year, month, day) = parse_dashed(date)?;
    let (hour, minute, second) = parse_coloned(time)?;
    let dt =
        CivilDateTime::new(year, month, day, hour, minute, second).map_err(|e| e.to_string())?;

    Ok(SolarTermEvent {
        year,
        term,
        instant: dt.to_instant(0),
    })
}

fn parse_dashed(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("bad date {s:?}"));
    }
    let year = parts[0].parse().map_err(|_| format!("bad year in {s:?}"))?;
    let month = parts[1].parse().map_err(|_| format!("bad month in {s:?}"))?;
    let day = parts[2].parse().map_err(|_| format!("bad day in {s:?}"))?;
    Ok((year, month, day))
}

fn parse_coloned(s: &str) -> Result<(u32, u32, u32), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(format!("bad time {s:?}"));
    }
    let hour = parts[0].parse().map_err(|_| format!("bad hour in {s:?}"))?;
    let minute = parts[1]
        .parse()
        .map_err(|_| format!("bad minute in {s:?}"))?;
    let second = parts[2]
        .parse()
        .map_err(|_| format!("bad second in {s:?}"))?;
    Ok((hour, minute, second))
}

fn validate(events: &[SolarTermEvent]) -> Result<(), AlmanacError> {
    for pair in events.windows(2) {
        if pair[1].instant <= pair[0].instant {
            return Err(AlmanacError::Parse(format!(
                "term entries out of order: {} does not follow {}",
                pair[1].term.name(),
                pair[0].term.name()
            )));
        }
        let expected = SolarTerm::at(pair[0].term.index() + 1);
        if pair[1].term != expected {
            return Err(AlmanacError::Parse(format!(
                "term sequence broken: {} followed by {}, expected {}",
                pair[0].term.name(),
                pair[1].term.name(),
                expected.name()
            )));
        }
    }
    Ok(())
}
