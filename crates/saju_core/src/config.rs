//! Chart configuration and birth input.
//!
//! Every school-dependent convention is an explicit option here; nothing
//! is decided by a hidden global. Defaults follow mainstream Korean
//! practice.

use serde::{Deserialize, Serialize};

/// Calendar the birth date fields are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarKind {
    Solar,
    /// Lunisolar date; `leap` marks the intercalary repetition of the month.
    Lunar { leap: bool },
}

/// Subject gender, used only to orient the luck-pillar sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// How a 23:00–23:59 birth assigns the day pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LateZiRule {
    /// The Ja hour opens the following day: day pillar and hour stem roll
    /// forward at 23:00.
    #[default]
    NextDay,
    /// The day pillar holds until midnight (the yajasi school).
    SameDay,
}

/// Whether hidden stems join the element tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HiddenStemTally {
    /// Count the 8 visible symbols only.
    #[default]
    VisibleOnly,
    /// Additionally tally every hidden stem with its day weight.
    Weighted,
}

/// Whether hidden stems receive Ten-Gods labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SipsinScope {
    /// Label visible stems and each branch (via its principal stem) only.
    #[default]
    VisibleOnly,
    /// Additionally label the non-principal hidden stems of every branch.
    WithHidden,
}

/// All knobs of a chart derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    pub late_zi: LateZiRule,
    pub hidden_tally: HiddenStemTally,
    pub sipsin_scope: SipsinScope,
    /// Shift the local clock to true solar time before any derivation.
    /// Requires `BirthInput::longitude_deg`.
    pub true_solar_time: bool,
}

/// A birth instant as supplied by the caller.
///
/// Date fields are read in the calendar named by `calendar`; lunar dates
/// are resolved through the almanac before any pillar is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub calendar: CalendarKind,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Minutes east of UTC for the birth clock (KST = 540).
    pub utc_offset_minutes: i32,
    /// Birthplace longitude in degrees east, for true-solar-time correction.
    pub longitude_deg: Option<f64>,
    /// Orients the luck-pillar sequence; omitted ⇒ no luck pillars.
    pub gender: Option<Gender>,
}
