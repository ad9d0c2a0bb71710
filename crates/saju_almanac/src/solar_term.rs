//! The 24 solar terms (jeolgi) and their month-branch associations.
//!
//! Terms alternate jeol (month-opening, odd ordinals, Ipchun = 1) and jung
//! (mid-month, even ordinals). A jung term carries the month branch of the
//! jeol that opened its month. Ordinals follow the saju convention of
//! counting from Ipchun, not from the astronomical Chunbun.

use serde::{Deserialize, Serialize};

use saju_ganji::Branch;
use saju_time::Instant;

/// The 24 solar terms in entry order, starting at Ipchun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
    Sohan,
    Daehan,
}

/// All 24 terms in entry order (Ipchun first).
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
    SolarTerm::Sohan,
    SolarTerm::Daehan,
];

impl SolarTerm {
    /// 0-based index in entry order (Ipchun=0 .. Daehan=23).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ipchun => 0,
            Self::Usu => 1,
            Self::Gyeongchip => 2,
            Self::Chunbun => 3,
            Self::Cheongmyeong => 4,
            Self::Gogu => 5,
            Self::Ipha => 6,
            Self::Soman => 7,
            Self::Mangjong => 8,
            Self::Haji => 9,
            Self::Soseo => 10,
            Self::Daeseo => 11,
            Self::Ipchu => 12,
            Self::Cheoseo => 13,
            Self::Baengno => 14,
            Self::Chubun => 15,
            Self::Hallo => 16,
            Self::Sanggang => 17,
            Self::Ipdong => 18,
            Self::Soseol => 19,
            Self::Daeseol => 20,
            Self::Dongji => 21,
            Self::Sohan => 22,
            Self::Daehan => 23,
        }
    }

    /// 1-based ordinal (Ipchun=1 .. Daehan=24).
    pub const fn ordinal(self) -> u8 {
        self.index() + 1
    }

    /// Romanized Korean name (lower case, as used in the table files).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ipchun => "ipchun",
            Self::Usu => "usu",
            Self::Gyeongchip => "gyeongchip",
            Self::Chunbun => "chunbun",
            Self::Cheongmyeong => "cheongmyeong",
            Self::Gogu => "gogu",
            Self::Ipha => "ipha",
            Self::Soman => "soman",
            Self::Mangjong => "mangjong",
            Self::Haji => "haji",
            Self::Soseo => "soseo",
            Self::Daeseo => "daeseo",
            Self::Ipchu => "ipchu",
            Self::Cheoseo => "cheoseo",
            Self::Baengno => "baengno",
            Self::Chubun => "chubun",
            Self::Hallo => "hallo",
            Self::Sanggang => "sanggang",
            Self::Ipdong => "ipdong",
            Self::Soseol => "soseol",
            Self::Daeseol => "daeseol",
            Self::Dongji => "dongji",
            Self::Sohan => "sohan",
            Self::Daehan => "daehan",
        }
    }

    /// Term at an entry-order index (taken mod 24).
    pub const fn at(index: u8) -> SolarTerm {
        ALL_TERMS[(index % 24) as usize]
    }

    /// Reverse lookup from the table-file name.
    pub fn from_name(name: &str) -> Option<SolarTerm> {
        ALL_TERMS.into_iter().find(|t| t.name() == name)
    }

    /// Whether this term opens a pillar month (jeol) rather than marking
    /// its middle (jung).
    pub const fn is_jeol(self) -> bool {
        self.index() % 2 == 0
    }

    /// The month branch in effect from this term's entry: In for
    /// Ipchun/Usu through Chuk for Sohan/Daehan.
    pub const fn month_branch(self) -> Branch {
        Branch::at(2 + self.index() / 2)
    }
}

/// A solar-term entry from the almanac table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTermEvent {
    /// Civil year of the entry instant (UTC).
    pub year: i32,
    pub term: SolarTerm,
    /// Exact entry instant (UTC).
    pub instant: Instant,
}

impl SolarTermEvent {
    /// The month branch this event puts in effect.
    pub const fn month_branch(self) -> Branch {
        self.term.month_branch()
    }
}
