//! Five-Elements (Ohaeng) balance tally.

use serde::{Deserialize, Serialize};

use saju_ganji::{ALL_ELEMENTS, Element, hidden_stems};

use crate::config::HiddenStemTally;
use crate::pillars::FourPillars;

/// Element counts across a chart.
///
/// `visible` counts the 8 visible symbols (4 stems + 4 branches), indexed
/// in [`ALL_ELEMENTS`] order. `hidden` is present only under
/// [`HiddenStemTally::Weighted`] and sums each hidden stem's Jijanggan day
/// weight per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementBalance {
    visible: [u32; 5],
    hidden: Option<[u32; 5]>,
}

impl ElementBalance {
    /// Visible-symbol count for an element.
    pub const fn count(&self, element: Element) -> u32 {
        self.visible[element.index() as usize]
    }

    /// Weighted hidden-stem day total for an element, when tallied.
    pub fn hidden_weight(&self, element: Element) -> Option<u32> {
        self.hidden.map(|h| h[element.index() as usize])
    }

    /// Sum of all visible counts (always 8 for a full chart).
    pub fn total_visible(&self) -> u32 {
        self.visible.iter().sum()
    }

    /// Elements with a zero visible count, in cycle order.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .into_iter()
            .filter(|e| self.count(*e) == 0)
            .collect()
    }
}

/// Tally the elements of a chart's stems and branches.
pub fn element_balance(pillars: &FourPillars, tally: HiddenStemTally) -> ElementBalance {
    let mut visible = [0u32; 5];
    for (_, ganji) in pillars.in_order() {
        visible[ganji.stem().element().index() as usize] += 1;
        visible[ganji.branch().element().index() as usize] += 1;
    }

    let hidden = match tally {
        HiddenStemTally::VisibleOnly => None,
        HiddenStemTally::Weighted => {
            let mut weights = [0u32; 5];
            for (_, ganji) in pillars.in_order() {
                for &(stem, days) in hidden_stems(ganji.branch()) {
                    weights[stem.element().index() as usize] += days as u32;
                }
            }
            Some(weights)
        }
    };

    ElementBalance { visible, hidden }
}
