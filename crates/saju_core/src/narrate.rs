//! Narration collaborator seam.
//!
//! Free-text commentary comes from an external service behind the
//! [`Narrator`] trait. The call is strictly additive: a failure is
//! reported to the caller and never touches the structured chart.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::chart::SajuChart;

/// Errors from the narration collaborator.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum NarrationError {
    /// The collaborator could not be reached or refused the request.
    ServiceUnavailable(String),
}

impl Display for NarrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ServiceUnavailable(msg) => write!(f, "narration unavailable: {msg}"),
        }
    }
}

impl Error for NarrationError {}

/// One-shot narration over a finished structured chart.
pub trait Narrator {
    fn narrate(&self, chart: &SajuChart) -> Result<String, NarrationError>;
}
