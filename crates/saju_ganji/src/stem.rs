//! The 10 Heavenly Stems (Cheongan).
//!
//! Each stem carries a fixed element (pairs of consecutive stems share one,
//! in generation-cycle order) and a polarity given by index parity.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The 10 Heavenly Stems in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (Gap=0 .. Gye=9).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

impl Stem {
    /// 0-based cycle index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    /// Hanja symbol.
    pub const fn hanja(self) -> char {
        match self {
            Self::Gap => '甲',
            Self::Eul => '乙',
            Self::Byeong => '丙',
            Self::Jeong => '丁',
            Self::Mu => '戊',
            Self::Gi => '己',
            Self::Gyeong => '庚',
            Self::Sin => '辛',
            Self::Im => '壬',
            Self::Gye => '癸',
        }
    }

    /// Fixed element: Gap/Eul Wood, Byeong/Jeong Fire, Mu/Gi Earth,
    /// Gyeong/Sin Metal, Im/Gye Water.
    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    /// Polarity from index parity (Gap Yang, Eul Eum, ...).
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Stem at a cycle index (taken mod 10).
    pub const fn at(index: u8) -> Stem {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Reverse lookup from a hanja symbol.
    pub fn from_hanja(c: char) -> Option<Stem> {
        ALL_STEMS.into_iter().find(|s| s.hanja() == c)
    }
}
