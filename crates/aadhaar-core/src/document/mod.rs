//! Document validity checks and the front/back verification pipeline.

mod gate;
mod verifier;

pub use gate::{DocumentGate, GateVerdict};
pub use verifier::{combine_sides, require_sides, DocumentVerifier};

use std::fmt;

use serde::{Deserialize, Serialize};

/// A side of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Front,
    Back,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Front => f.write_str("front"),
            Side::Back => f.write_str("back"),
        }
    }
}
