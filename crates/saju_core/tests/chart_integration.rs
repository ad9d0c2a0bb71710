//! End-to-end chart derivation against a fixed in-memory almanac.
//!
//! The fixture covers early 2024 (Daehan through Cheongmyeong, UTC) and
//! the surrounding lunar months, enough to exercise the Ipchun year
//! boundary, the jeol month boundaries, lunar input, luck pillars, and
//! every out-of-range path.

use saju_almanac::{AlmanacError, TableAlmanac};
use saju_core::{
    BirthInput, CalendarKind, ChartConfig, Gender, HiddenStemTally, LateZiRule, NarrationError,
    Narrator, SajuChart, SajuError, SipsinScope, cast_chart,
};

const TERMS: &str = "\
# term         date(UTC)   time(UTC)
daehan         2024-01-20  03:07:00
ipchun         2024-02-04  08:27:00
usu            2024-02-19  04:13:00
gyeongchip     2024-03-05  02:23:00
chunbun        2024-03-20  03:06:00
cheongmyeong   2024-04-04  07:02:00
";

const LUNAR: &str = "\
# year month leap first-day   days
2023   11    -    2023-12-13  29
2023   12    -    2024-01-11  30
2024   1     -    2024-02-10  29
2024   2     -    2024-03-10  30
";

fn almanac() -> TableAlmanac {
    TableAlmanac::parse(TERMS, LUNAR).expect("fixture tables must parse")
}

/// Solar birth input at KST with no options.
fn kst_input(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> BirthInput {
    BirthInput {
        calendar: CalendarKind::Solar,
        year,
        month,
        day,
        hour,
        minute,
        second,
        utc_offset_minutes: 540,
        longitude_deg: None,
        gender: None,
    }
}

fn pillar_strings(chart: &SajuChart) -> [String; 4] {
    [
        chart.pillars.year.to_string(),
        chart.pillars.month.to_string(),
        chart.pillars.day.to_string(),
        chart.pillars.hour.to_string(),
    ]
}

#[test]
fn chart_exactly_at_ipchun() {
    // Ipchun 2024 entered at 17:27:00 KST; at the instant itself the new
    // year is already in effect.
    let almanac = almanac();
    let input = kst_input(2024, 2, 4, 17, 27, 0);
    let chart = cast_chart(&almanac, &input, &ChartConfig::default()).unwrap();
    assert_eq!(
        pillar_strings(&chart),
        ["甲辰", "丙寅", "戊戌", "辛酉"].map(String::from)
    );
}

#[test]
fn one_second_before_ipchun_is_previous_year() {
    let almanac = almanac();
    let input = kst_input(2024, 2, 4, 17, 26, 59);
    let chart = cast_chart(&almanac, &input, &ChartConfig::default()).unwrap();
    // Still the Gyemyo year and its Chuk month; day and hour unmoved.
    assert_eq!(
        pillar_strings(&chart),
        ["癸卯", "乙丑", "戊戌", "辛酉"].map(String::from)
    );
}

#[test]
fn late_zi_rolls_day_under_next_day_rule() {
    let almanac = almanac();
    let input = kst_input(2024, 2, 4, 23, 30, 0);
    let chart = cast_chart(&almanac, &input, &ChartConfig::default()).unwrap();
    // 23:30 opens the Ja hour of the following day.
    assert_eq!(chart.pillars.day.to_string(), "己亥");
    assert_eq!(chart.pillars.hour.to_string(), "甲子");
}

#[test]
fn late_zi_same_day_rule_keeps_day() {
    let almanac = almanac();
    let input = kst_input(2024, 2, 4, 23, 30, 0);
    let config = ChartConfig {
        late_zi: LateZiRule::SameDay,
        ..ChartConfig::default()
    };
    let chart = cast_chart(&almanac, &input, &config).unwrap();
    assert_eq!(chart.pillars.day.to_string(), "戊戌");
    assert_eq!(chart.pillars.hour.to_string(), "壬子");
}

#[test]
fn lunar_input_matches_its_solar_date() {
    // Lunar 2024-01-01 fell on solar 2024-02-10.
    let almanac = almanac();
    let lunar = BirthInput {
        calendar: CalendarKind::Lunar { leap: false },
        year: 2024,
        month: 1,
        day: 1,
        ..kst_input(0, 1, 1, 12, 0, 0)
    };
    let solar = kst_input(2024, 2, 10, 12, 0, 0);
    let config = ChartConfig::default();
    let from_lunar = cast_chart(&almanac, &lunar, &config).unwrap();
    let from_solar = cast_chart(&almanac, &solar, &config).unwrap();
    assert_eq!(from_lunar, from_solar);
    assert_eq!(from_lunar.pillars.day.to_string(), "甲辰");
}

#[test]
fn visible_balance_sums_to_eight() {
    let almanac = almanac();
    let input = kst_input(2024, 2, 10, 12, 0, 0);
    let chart = cast_chart(&almanac, &input, &ChartConfig::default()).unwrap();
    assert_eq!(chart.balance.total_visible(), 8);
}

#[test]
fn hidden_options_extend_the_analysis() {
    let almanac = almanac();
    let input = kst_input(2024, 2, 10, 12, 0, 0);
    let base = cast_chart(&almanac, &input, &ChartConfig::default()).unwrap();
    let config = ChartConfig {
        hidden_tally: HiddenStemTally::Weighted,
        sipsin_scope: SipsinScope::WithHidden,
        ..ChartConfig::default()
    };
    let extended = cast_chart(&almanac, &input, &config).unwrap();
    assert_eq!(base.pillars, extended.pillars);
    assert!(extended.sipsin.len() > base.sipsin.len());
    assert!(
        saju_ganji::ALL_ELEMENTS
            .into_iter()
            .any(|e| extended.balance.hidden_weight(e).is_some())
    );
    assert!(base.balance.hidden_weight(saju_ganji::Element::Wood).is_none());
}

#[test]
fn true_solar_time_can_move_the_year_boundary() {
    // 17:40 clock time in Seoul is 17:08 true solar time, back across the
    // 17:27 Ipchun boundary.
    let almanac = almanac();
    let mut input = kst_input(2024, 2, 4, 17, 40, 0);
    input.longitude_deg = Some(126.98);
    let plain = cast_chart(&almanac, &input, &ChartConfig::default()).unwrap();
    assert_eq!(plain.pillars.year.to_string(), "甲辰");

    let config = ChartConfig {
        true_solar_time: true,
        ..ChartConfig::default()
    };
    let corrected = cast_chart(&almanac, &input, &config).unwrap();
    assert_eq!(corrected.pillars.year.to_string(), "癸卯");
    assert_eq!(corrected.pillars.month.to_string(), "乙丑");
    assert_eq!((corrected.birth_local.hour, corrected.birth_local.minute), (17, 8));
}

#[test]
fn true_solar_time_requires_longitude() {
    let almanac = almanac();
    let input = kst_input(2024, 2, 10, 12, 0, 0);
    let config = ChartConfig {
        true_solar_time: true,
        ..ChartConfig::default()
    };
    assert_eq!(
        cast_chart(&almanac, &input, &config).unwrap_err(),
        SajuError::MissingLongitude
    );
}

#[test]
fn luck_pillars_forward_for_yang_year_male() {
    let almanac = almanac();
    let mut input = kst_input(2024, 2, 10, 12, 0, 0);
    input.gender = Some(Gender::Male);
    let chart = cast_chart(&almanac, &input, &ChartConfig::default()).unwrap();
    let luck = chart.luck.expect("gendered input yields luck pillars");
    assert_eq!(luck.len(), 8);
    // 23.97 days to Gyeongchip at 3 days per year rounds to 8.
    assert_eq!(luck[0].start_age, 8);
    assert_eq!(luck[0].ganji.to_string(), "丁卯");
    assert_eq!(luck[1].start_age, 18);
    assert_eq!(luck[1].ganji.to_string(), "戊辰");
}

#[test]
fn luck_pillars_backward_for_yang_year_female() {
    let almanac = almanac();
    let mut input = kst_input(2024, 2, 10, 12, 0, 0);
    input.gender = Some(Gender::Female);
    let chart = cast_chart(&almanac, &input, &ChartConfig::default()).unwrap();
    let luck = chart.luck.unwrap();
    // 5.77 days back to Ipchun rounds to 2.
    assert_eq!(luck[0].start_age, 2);
    assert_eq!(luck[0].ganji.to_string(), "乙丑");
    assert_eq!(luck[1].ganji.to_string(), "甲子");
}

#[test]
fn no_gender_no_luck_pillars() {
    let almanac = almanac();
    let input = kst_input(2024, 2, 10, 12, 0, 0);
    let chart = cast_chart(&almanac, &input, &ChartConfig::default()).unwrap();
    assert!(chart.luck.is_none());
}

#[test]
fn date_outside_term_table_is_reported() {
    let almanac = almanac();
    let input = kst_input(2024, 6, 1, 12, 0, 0);
    match cast_chart(&almanac, &input, &ChartConfig::default()) {
        Err(SajuError::Almanac(AlmanacError::TermOutOfRange(_))) => {}
        other => panic!("expected TermOutOfRange, got {other:?}"),
    }
}

#[test]
fn lunar_year_outside_table_is_reported() {
    let almanac = almanac();
    let input = BirthInput {
        calendar: CalendarKind::Lunar { leap: false },
        year: 1800,
        ..kst_input(0, 1, 1, 12, 0, 0)
    };
    match cast_chart(&almanac, &input, &ChartConfig::default()) {
        Err(SajuError::Almanac(AlmanacError::LunarOutOfRange { year: 1800 })) => {}
        other => panic!("expected LunarOutOfRange, got {other:?}"),
    }
}

#[test]
fn impossible_dates_are_invalid_input() {
    let almanac = almanac();
    let config = ChartConfig::default();

    let bad_solar = kst_input(2024, 2, 30, 12, 0, 0);
    assert!(matches!(
        cast_chart(&almanac, &bad_solar, &config),
        Err(SajuError::Time(_))
    ));

    let bad_hour = kst_input(2024, 2, 10, 24, 0, 0);
    assert!(matches!(
        cast_chart(&almanac, &bad_hour, &config),
        Err(SajuError::Time(_))
    ));

    // Day 30 of the 29-day first lunar month of 2024.
    let bad_lunar = BirthInput {
        calendar: CalendarKind::Lunar { leap: false },
        year: 2024,
        month: 1,
        day: 30,
        ..kst_input(0, 1, 1, 12, 0, 0)
    };
    assert!(matches!(
        cast_chart(&almanac, &bad_lunar, &config),
        Err(SajuError::Almanac(AlmanacError::InvalidLunarDate(_)))
    ));
}

struct CannedNarrator;

impl Narrator for CannedNarrator {
    fn narrate(&self, chart: &SajuChart) -> Result<String, NarrationError> {
        Ok(format!("day master {}", chart.pillars.day.stem().name()))
    }
}

struct DownNarrator;

impl Narrator for DownNarrator {
    fn narrate(&self, _chart: &SajuChart) -> Result<String, NarrationError> {
        Err(NarrationError::ServiceUnavailable("timeout".into()))
    }
}

#[test]
fn narration_attaches_on_success() {
    let almanac = almanac();
    let input = kst_input(2024, 2, 10, 12, 0, 0);
    let mut chart = cast_chart(&almanac, &input, &ChartConfig::default()).unwrap();
    chart.attach_narration(&CannedNarrator).unwrap();
    assert_eq!(chart.narration.as_deref(), Some("day master Gap"));
}

#[test]
fn narration_failure_leaves_chart_intact() {
    let almanac = almanac();
    let input = kst_input(2024, 2, 10, 12, 0, 0);
    let mut chart = cast_chart(&almanac, &input, &ChartConfig::default()).unwrap();
    let pristine = chart.clone();
    let err = chart.attach_narration(&DownNarrator).unwrap_err();
    assert!(matches!(err, NarrationError::ServiceUnavailable(_)));
    assert_eq!(chart, pristine);
    assert!(chart.narration.is_none());
}

#[test]
fn identical_inputs_yield_identical_charts() {
    let almanac = almanac();
    let input = kst_input(2024, 2, 10, 12, 0, 0);
    let config = ChartConfig::default();
    let a = cast_chart(&almanac, &input, &config).unwrap();
    let b = cast_chart(&almanac, &input, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn chart_serializes_to_json() {
    let almanac = almanac();
    let input = kst_input(2024, 2, 10, 12, 0, 0);
    let chart = cast_chart(&almanac, &input, &ChartConfig::default()).unwrap();
    let json = serde_json::to_string(&chart).unwrap();
    assert!(json.contains("\"pillars\""));
    assert!(json.contains("\"balance\""));
}
