//! Julian day number ↔ proleptic-Gregorian calendar arithmetic.
//!
//! Integer Fliegel–Van Flandern conversions. The day-count pillar rests on
//! this arithmetic, so everything stays in `i64` with no floating point.

/// Julian day number of 2000-01-01 (the `Instant` epoch day).
pub const EPOCH_JDN: i64 = 2_451_545;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a Gregorian month; 0 for an invalid month number.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Julian day number of a Gregorian calendar date.
///
/// Valid for all dates of calendrical interest (the supported almanac
/// range is far narrower). Caller is responsible for field validity;
/// `CivilDate::new` performs that check.
pub const fn civil_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    let a = (m - 14) / 12;
    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075
}

/// Gregorian calendar date of a Julian day number.
pub const fn jdn_to_civil(jdn: i64) -> (i32, u32, u32) {
    let mut l = jdn + 68_569;
    let n = (4 * l) / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1_461_001;
    l = l - (1461 * i) / 4 + 31;
    let j = (80 * l) / 2447;
    let d = l - (2447 * j) / 80;
    l = j / 11;
    let m = j + 2 - 12 * l;
    let y = 100 * (n - 49) + i + l;
    (y as i32, m as u32, d as u32)
}
