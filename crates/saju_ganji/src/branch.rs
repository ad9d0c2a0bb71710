//! The 12 Earthly Branches (Jiji).
//!
//! Each branch carries a fixed element, a polarity given by index parity,
//! and a zodiac animal. The branch ordinal doubles as the hour-slot index
//! (Ja opens the day at 23:00) and as the month ordinal counted from the
//! In month.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The 12 Earthly Branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (Ja=0 .. Hae=11).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

impl Branch {
    /// 0-based cycle index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    /// Hanja symbol.
    pub const fn hanja(self) -> char {
        match self {
            Self::Ja => '子',
            Self::Chuk => '丑',
            Self::In => '寅',
            Self::Myo => '卯',
            Self::Jin => '辰',
            Self::Sa => '巳',
            Self::O => '午',
            Self::Mi => '未',
            Self::Sin => '申',
            Self::Yu => '酉',
            Self::Sul => '戌',
            Self::Hae => '亥',
        }
    }

    /// Fixed element. The four Earth branches (Jin, Sul, Chuk, Mi) sit
    /// between the seasonal triads.
    pub const fn element(self) -> Element {
        match self {
            Self::Ja | Self::Hae => Element::Water,
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
        }
    }

    /// Polarity from index parity (Ja Yang, Chuk Eum, ...).
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Zodiac animal (tti) of the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "Rat",
            Self::Chuk => "Ox",
            Self::In => "Tiger",
            Self::Myo => "Rabbit",
            Self::Jin => "Dragon",
            Self::Sa => "Snake",
            Self::O => "Horse",
            Self::Mi => "Goat",
            Self::Sin => "Monkey",
            Self::Yu => "Rooster",
            Self::Sul => "Dog",
            Self::Hae => "Pig",
        }
    }

    /// Branch at a cycle index (taken mod 12).
    pub const fn at(index: u8) -> Branch {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Reverse lookup from a hanja symbol.
    pub fn from_hanja(c: char) -> Option<Branch> {
        ALL_BRANCHES.into_iter().find(|b| b.hanja() == c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_branches_count() {
        assert_eq!(ALL_BRANCHES.len(), 12);
    }

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn element_table() {
        assert_eq!(Branch::Ja.element(), Element::Water);
        assert_eq!(Branch::In.element(), Element::Wood);
        assert_eq!(Branch::O.element(), Element::Fire);
        assert_eq!(Branch::Yu.element(), Element::Metal);
        assert_eq!(Branch::Sul.element(), Element::Earth);
        assert_eq!(Branch::Hae.element(), Element::Water);
    }

    #[test]
    fn four_earth_branches() {
        let earth: Vec<Branch> = ALL_BRANCHES
            .into_iter()
            .filter(|b| b.element() == Element::Earth)
            .collect();
        assert_eq!(
            earth,
            vec![Branch::Chuk, Branch::Jin, Branch::Mi, Branch::Sul]
        );
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Branch::Ja.polarity(), Polarity::Yang);
        assert_eq!(Branch::Chuk.polarity(), Polarity::Eum);
        assert_eq!(Branch::Sul.polarity(), Polarity::Yang);
        assert_eq!(Branch::Hae.polarity(), Polarity::Eum);
    }

    #[test]
    fn at_wraps_mod_12() {
        assert_eq!(Branch::at(0), Branch::Ja);
        assert_eq!(Branch::at(11), Branch::Hae);
        assert_eq!(Branch::at(12), Branch::Ja);
        assert_eq!(Branch::at(40), Branch::Jin);
    }

    #[test]
    fn hanja_roundtrip() {
        for b in ALL_BRANCHES {
            assert_eq!(Branch::from_hanja(b.hanja()), Some(b));
        }
        assert_eq!(Branch::from_hanja('甲'), None);
    }
}
