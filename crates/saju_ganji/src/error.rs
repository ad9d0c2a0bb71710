//! Error types for ganji text handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from parsing or constructing ganji pairs.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GanjiError {
    /// Input text is not a 2-symbol stem+branch hanja pair.
    MalformedGanji(String),
    /// Stem and branch indices disagree in parity; the pair is outside
    /// the 60-entry cycle.
    MismatchedParity { stem: Stem, branch: Branch },
}

impl Display for GanjiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedGanji(text) => {
                write!(f, "malformed ganji text: {text:?}")
            }
            Self::MismatchedParity { stem, branch } => write!(
                f,
                "{}{} is not in the 60-cycle: stem and branch parity differ",
                stem.hanja(),
                branch.hanja()
            ),
        }
    }
}

impl Error for GanjiError {}
