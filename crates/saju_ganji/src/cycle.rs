//! The 60-entry Ganji cycle.
//!
//! A ganji is a (stem, branch) pair whose indices agree in parity; exactly
//! 60 of the 120 combinations are valid. The cycle index satisfies
//! `index ≡ stem (mod 10)` and `index ≡ branch (mod 12)`, which the
//! Chinese-remainder form `(6·stem + 55·branch) mod 60` solves directly.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::GanjiError;
use crate::stem::Stem;

/// A valid stem+branch pair from the 60-entry cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ganji {
    stem: Stem,
    branch: Branch,
}

impl Ganji {
    /// Build a ganji from a stem and branch, rejecting parity mismatches.
    pub fn new(stem: Stem, branch: Branch) -> Result<Ganji, GanjiError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(GanjiError::MismatchedParity { stem, branch });
        }
        Ok(Ganji { stem, branch })
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Cycle index 0-59 (Gapja=0 .. Gyehae=59).
    pub const fn cycle_index(self) -> u8 {
        ((6 * self.stem.index() as u16 + 55 * self.branch.index() as u16) % 60) as u8
    }

    /// Romanized name, e.g. "Gapja".
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name().to_lowercase())
    }
}

impl Display for Ganji {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

/// Ganji at a cycle index (taken mod 60).
pub const fn ganji_at(index: u8) -> Ganji {
    let i = index % 60;
    Ganji {
        stem: Stem::at(i % 10),
        branch: Branch::at(i % 12),
    }
}

/// Parse a 2-symbol hanja pair like "甲子" into a [`Ganji`].
///
/// Fails with [`GanjiError::MalformedGanji`] unless the input is exactly a
/// stem symbol followed by a branch symbol, and with
/// [`GanjiError::MismatchedParity`] for pairs outside the 60-cycle.
pub fn split_ganji(text: &str) -> Result<Ganji, GanjiError> {
    let mut chars = text.chars();
    let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(GanjiError::MalformedGanji(text.to_string()));
    };
    let stem =
        Stem::from_hanja(first).ok_or_else(|| GanjiError::MalformedGanji(text.to_string()))?;
    let branch =
        Branch::from_hanja(second).ok_or_else(|| GanjiError::MalformedGanji(text.to_string()))?;
    Ganji::new(stem, branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gapja_is_index_zero() {
        let g = ganji_at(0);
        assert_eq!(g.stem(), Stem::Gap);
        assert_eq!(g.branch(), Branch::Ja);
        assert_eq!(g.cycle_index(), 0);
    }

    #[test]
    fn gyehae_is_index_59() {
        let g = ganji_at(59);
        assert_eq!(g.stem(), Stem::Gye);
        assert_eq!(g.branch(), Branch::Hae);
        assert_eq!(g.cycle_index(), 59);
    }

    #[test]
    fn all_60_round_trip() {
        for i in 0..60u8 {
            let g = ganji_at(i);
            assert_eq!(g.cycle_index(), i, "index {i} does not round-trip");
        }
    }

    #[test]
    fn index_wraps_mod_60() {
        assert_eq!(ganji_at(60), ganji_at(0));
        assert_eq!(ganji_at(119), ganji_at(59));
    }

    #[test]
    fn parity_congruences_hold() {
        for i in 0..60u8 {
            let g = ganji_at(i);
            assert_eq!(g.stem().index(), i % 10);
            assert_eq!(g.branch().index(), i % 12);
        }
    }

    #[test]
    fn new_rejects_mismatched_parity() {
        // Gap (0, yang) with Chuk (1, eum) is not in the cycle.
        let err = Ganji::new(Stem::Gap, Branch::Chuk).unwrap_err();
        assert!(matches!(err, GanjiError::MismatchedParity { .. }));
    }

    #[test]
    fn new_accepts_matched_parity() {
        let g = Ganji::new(Stem::Byeong, Branch::In).unwrap();
        assert_eq!(g.cycle_index(), 2); // Byeongin
    }

    #[test]
    fn split_valid_pair() {
        let g = split_ganji("甲子").unwrap();
        assert_eq!(g, ganji_at(0));
        let g = split_ganji("戊午").unwrap();
        assert_eq!(g.cycle_index(), 54);
    }

    #[test]
    fn split_rejects_wrong_length() {
        assert!(matches!(
            split_ganji("甲"),
            Err(GanjiError::MalformedGanji(_))
        ));
        assert!(matches!(
            split_ganji("甲子丑"),
            Err(GanjiError::MalformedGanji(_))
        ));
        assert!(matches!(split_ganji(""), Err(GanjiError::MalformedGanji(_))));
    }

    #[test]
    fn split_rejects_wrong_symbols() {
        // Branch first, stem second.
        assert!(matches!(
            split_ganji("子甲"),
            Err(GanjiError::MalformedGanji(_))
        ));
        assert!(matches!(
            split_ganji("ab"),
            Err(GanjiError::MalformedGanji(_))
        ));
    }

    #[test]
    fn split_rejects_parity_mismatch() {
        assert!(matches!(
            split_ganji("甲丑"),
            Err(GanjiError::MismatchedParity { .. })
        ));
    }

    #[test]
    fn display_is_hanja_pair() {
        assert_eq!(ganji_at(0).to_string(), "甲子");
        assert_eq!(ganji_at(40).to_string(), "甲辰");
    }

    #[test]
    fn romanized_name() {
        assert_eq!(ganji_at(0).name(), "Gapja");
        assert_eq!(ganji_at(54).name(), "Muo");
    }
}
