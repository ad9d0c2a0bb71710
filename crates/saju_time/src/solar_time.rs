//! True-solar-time longitude correction.
//!
//! Clock time follows the zone meridian; the apparent sun follows the
//! birthplace longitude. The correction is the 4-minutes-per-degree offset
//! between the two. The equation-of-time term is not applied here: the
//! almanac's solar-term instants already carry the apparent sun.

/// Minutes to add to local clock time so that it reads true solar time.
///
/// `utc_offset_minutes` fixes the zone meridian (15° per hour east of
/// Greenwich). A birthplace west of its zone meridian yields a negative
/// correction — Seoul (126.98°E, UTC+9, meridian 135°E) gives −32.
pub fn longitude_correction_minutes(longitude_deg: f64, utc_offset_minutes: i32) -> i64 {
    let meridian_deg = utc_offset_minutes as f64 * 0.25;
    ((longitude_deg - meridian_deg) * 4.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seoul_runs_32_minutes_behind() {
        assert_eq!(longitude_correction_minutes(126.98, 540), -32);
    }

    #[test]
    fn zone_meridian_needs_no_correction() {
        assert_eq!(longitude_correction_minutes(135.0, 540), 0);
        assert_eq!(longitude_correction_minutes(0.0, 0), 0);
    }

    #[test]
    fn east_of_meridian_is_positive() {
        // 140°E under UTC+9: 5° east of the meridian, +20 minutes.
        assert_eq!(longitude_correction_minutes(140.0, 540), 20);
    }
}
