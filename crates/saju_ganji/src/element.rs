//! The five Elements (Ohaeng) and the Yang/Eum polarity pair.
//!
//! The generation cycle (Wood feeds Fire, Fire makes Earth, Earth bears
//! Metal, Metal carries Water, Water nourishes Wood) and the destruction
//! cycle (Wood breaks Earth, Earth dams Water, Water quenches Fire, Fire
//! melts Metal, Metal cuts Wood) are fixed domain data; every relational
//! derivation downstream is built on these two cycles.

use serde::{Deserialize, Serialize};

/// The five Elements in generation-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generation-cycle order (Wood=0 .. Water=4).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Hanja symbol.
    pub const fn hanja(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }

    /// 0-based index in generation-cycle order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates (the next in the generation cycle).
    pub const fn generates(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one destroys (two steps along the generation cycle).
    pub const fn destroys(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }
}

/// Yang/Eum polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Eum,
}

impl Polarity {
    /// Polarity from a cycle index: even indices are Yang, odd are Eum.
    pub const fn from_index(index: u8) -> Polarity {
        if index % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Eum
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Eum => "Eum",
        }
    }
}
