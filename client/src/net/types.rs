//! Wire DTOs for the rover API.
//!
//! DESIGN
//! ======
//! Only the fields the UI renders are modelled. Anything else the backend
//! sends is ignored by serde, so richer rover payloads still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A Mars rover as listed by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rover {
    pub name: String,
}

/// Body of the rover-list endpoint: `{ "rovers": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverList {
    pub rovers: Vec<Rover>,
}
