//! Ten-Gods (SipSin) relational analysis.
//!
//! Every label is the product of two fixed facts: where the target's
//! element sits relative to the Day Stem's element on the
//! generation/destruction cycles, and whether the two polarities match.
//! Ten combinations, ten categories, no other rule.

use serde::{Deserialize, Serialize};

use saju_ganji::{Stem, hidden_stems, principal_stem};

use crate::config::SipsinScope;
use crate::pillars::{FourPillars, PillarKind};

/// The ten relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sipsin {
    Bigyeon,
    Geobjae,
    Siksin,
    Sanggwan,
    Pyeonjae,
    Jeongjae,
    Pyeongwan,
    Jeonggwan,
    Pyeonin,
    Jeongin,
}

/// All ten categories, peers first, then output/wealth/officer/resource
/// pairs.
pub const ALL_SIPSIN: [Sipsin; 10] = [
    Sipsin::Bigyeon,
    Sipsin::Geobjae,
    Sipsin::Siksin,
    Sipsin::Sanggwan,
    Sipsin::Pyeonjae,
    Sipsin::Jeongjae,
    Sipsin::Pyeongwan,
    Sipsin::Jeonggwan,
    Sipsin::Pyeonin,
    Sipsin::Jeongin,
];

impl Sipsin {
    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bigyeon => "Bigyeon",
            Self::Geobjae => "Geobjae",
            Self::Siksin => "Siksin",
            Self::Sanggwan => "Sanggwan",
            Self::Pyeonjae => "Pyeonjae",
            Self::Jeongjae => "Jeongjae",
            Self::Pyeongwan => "Pyeongwan",
            Self::Jeonggwan => "Jeonggwan",
            Self::Pyeonin => "Pyeonin",
            Self::Jeongin => "Jeongin",
        }
    }

    /// Hanja pair.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Bigyeon => "比肩",
            Self::Geobjae => "劫財",
            Self::Siksin => "食神",
            Self::Sanggwan => "傷官",
            Self::Pyeonjae => "偏財",
            Self::Jeongjae => "正財",
            Self::Pyeongwan => "偏官",
            Self::Jeonggwan => "正官",
            Self::Pyeonin => "偏印",
            Self::Jeongin => "正印",
        }
    }
}

/// The Ten-Gods label of `target` relative to `day_stem`.
pub fn sipsin_relation(day_stem: Stem, target: Stem) -> Sipsin {
    let me = day_stem.element();
    let other = target.element();
    let same_polarity = day_stem.polarity() == target.polarity();

    if other == me {
        // Peer group.
        if same_polarity {
            Sipsin::Bigyeon
        } else {
            Sipsin::Geobjae
        }
    } else if me.generates() == other {
        // Output group (what I give birth to).
        if same_polarity {
            Sipsin::Siksin
        } else {
            Sipsin::Sanggwan
        }
    } else if me.destroys() == other {
        // Wealth group (what I command).
        if same_polarity {
            Sipsin::Pyeonjae
        } else {
            Sipsin::Jeongjae
        }
    } else if other.destroys() == me {
        // Officer group (what commands me).
        if same_polarity {
            Sipsin::Pyeongwan
        } else {
            Sipsin::Jeonggwan
        }
    } else {
        // Resource group (what gives birth to me).
        debug_assert_eq!(other.generates(), me);
        if same_polarity {
            Sipsin::Pyeonin
        } else {
            Sipsin::Jeongin
        }
    }
}

/// Where a labeled stem sits within its pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Place {
    /// The pillar's visible stem.
    Stem,
    /// The pillar's branch, labeled through its principal hidden stem.
    Branch,
    /// A non-principal hidden stem of the branch.
    Hidden,
}

/// One labeled position of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipsinEntry {
    pub pillar: PillarKind,
    pub place: Place,
    pub stem: Stem,
    pub sipsin: Sipsin,
}

/// Label every position of the chart relative to the Day Stem.
///
/// The Day Stem itself is the reference and receives no entry. Branches
/// are labeled through their principal stem; `SipsinScope::WithHidden`
/// additionally labels the non-principal hidden stems.
pub fn sipsin_entries(pillars: &FourPillars, scope: SipsinScope) -> Vec<SipsinEntry> {
    let day_stem = pillars.day_stem();
    let mut entries = Vec::new();

    for (kind, ganji) in pillars.in_order() {
        if kind != PillarKind::Day {
            entries.push(SipsinEntry {
                pillar: kind,
                place: Place::Stem,
                stem: ganji.stem(),
                sipsin: sipsin_relation(day_stem, ganji.stem()),
            });
        }

        let principal = principal_stem(ganji.branch());
        entries.push(SipsinEntry {
            pillar: kind,
            place: Place::Branch,
            stem: principal,
            sipsin: sipsin_relation(day_stem, principal),
        });

        if scope == SipsinScope::WithHidden {
            let hidden = hidden_stems(ganji.branch());
            for &(stem, _) in &hidden[..hidden.len() - 1] {
                entries.push(SipsinEntry {
                    pillar: kind,
                    place: Place::Hidden,
                    stem,
                    sipsin: sipsin_relation(day_stem, stem),
                });
            }
        }
    }

    entries
}
