//! Lunar calendar records and lunar ↔ solar conversion.
//!
//! The table is one record per lunar month:
//!
//! ```text
//! # year month leap first-solar-day days
//! 2024   1     -    2024-02-10     29
//! 2024   2     -    2024-03-10     30
//! ```
//!
//! The `leap` column is `leap` for an intercalary month, `-` otherwise.
//! Records must be contiguous: each month starts the day after the
//! previous one ends. Per-day conversion is derived from these records
//! (the normalized form of the per-day tables the surrounding system
//! stores).

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use saju_time::CivilDate;

use crate::error::AlmanacError;

/// A date on the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// True when the month is the intercalary (leap) repetition.
    pub leap: bool,
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.leap {
            write!(f, " (leap)")?;
        }
        Ok(())
    }
}

/// One lunar month: its solar first day and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonthRecord {
    pub year: i32,
    pub month: u32,
    pub leap: bool,
    pub first_day: CivilDate,
    pub days: u32,
}

/// Sorted, validated lunar month table.
#[derive(Debug, Clone)]
pub struct LunarTable {
    records: Vec<LunarMonthRecord>,
}

impl LunarTable {
    /// Parse a lunar table from its text content.
    pub fn parse(content: &str) -> Result<Self, AlmanacError> {
        let mut records = Vec::new();
        for (lineno, line) in content.lines().enumerate() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let record = parse_line(line)
                .map_err(|msg| AlmanacError::Parse(format!("line {}: {msg}", lineno + 1)))?;
            records.push(record);
        }
        if records.is_empty() {
            return Err(AlmanacError::Parse("lunar table has no entries".into()));
        }
        validate(&records)?;
        Ok(Self { records })
    }

    /// All records in solar order.
    pub fn records(&self) -> &[LunarMonthRecord] {
        &self.records
    }

    /// Solar equivalent of a lunar date.
    pub fn lunar_to_solar(&self, lunar: LunarDate) -> Result<CivilDate, AlmanacError> {
        if !self.records.iter().any(|r| r.year == lunar.year) {
            return Err(AlmanacError::LunarOutOfRange { year: lunar.year });
        }
        let record = self
            .records
            .iter()
            .find(|r| r.year == lunar.year && r.month == lunar.month && r.leap == lunar.leap)
            .ok_or(AlmanacError::InvalidLunarDate(lunar))?;
        if lunar.day == 0 || lunar.day > record.days {
            return Err(AlmanacError::InvalidLunarDate(lunar));
        }
        Ok(record.first_day.plus_days(lunar.day as i64 - 1))
    }

    /// Lunar equivalent of a solar date.
    pub fn solar_to_lunar(&self, date: CivilDate) -> Result<LunarDate, AlmanacError> {
        let idx = self
            .records
            .partition_point(|r| r.first_day.jdn() <= date.jdn());
        if idx == 0 {
            return Err(AlmanacError::SolarOutOfRange(date));
        }
        let record = &self.records[idx - 1];
        let offset = date.jdn() - record.first_day.jdn();
        if offset >= record.days as i64 {
            return Err(AlmanacError::SolarOutOfRange(date));
        }
        Ok(LunarDate {
            year: record.year,
            month: record.month,
            day: offset as u32 + 1,
            leap: record.leap,
        })
    }
}

fn parse_line(line: &str) -> Result<LunarMonthRecord, String> {
    let mut fields = line.split_whitespace();
    let (Some(year), Some(month), Some(leap), Some(first), Some(days), None) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return Err(format!(
            "expected `year month leap first-day days`, got {line:?}"
        ));
    };

    let year: i32 = year.parse().map_err(|_| format!("bad year {year:?}"))?;
    let month: u32 = month.parse().map_err(|_| format!("bad month {month:?}"))?;
    if !(1..=12).contains(&month) {
        return Err(format!("month {month} out of range"));
    }
    let leap = match leap {
        "leap" => true,
        "-" => false,
        other => return Err(format!("bad leap marker {other:?}")),
    };
    let days: u32 = days.parse().map_err(|_| format!("bad length {days:?}"))?;
    if days != 29 && days != 30 {
        return Err(format!("month length {days} is neither 29 nor 30"));
    }

    let parts: Vec<&str> = first.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("bad date {first:?}"));
    }
    let fy: i32 = parts[0].parse().map_err(|_| format!("bad date {first:?}"))?;
    let fm: u32 = parts[1].parse().map_err(|_| format!("bad date {first:?}"))?;
    let fd: u32 = parts[2].parse().map_err(|_| format!("bad date {first:?}"))?;
    let first_day = CivilDate::new(fy, fm, fd).map_err(|e| e.to_string())?;

    Ok(LunarMonthRecord {
        year,
        month,
        leap,
        first_day,
        days,
    })
}

fn validate(records: &[LunarMonthRecord]) -> Result<(), AlmanacError> {
    for pair in records.windows(2) {
        let expected_next = pair[0].first_day.plus_days(pair[0].days as i64);
        if pair[1].first_day != expected_next {
            return Err(AlmanacError::Parse(format!(
                "lunar months not contiguous: month after {} starts {}, expected {}",
                pair[0].first_day, pair[1].first_day, expected_next
            )));
        }
    }
    Ok(())
}
