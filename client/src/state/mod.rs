//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs with explicit transitions so the reactive
//! components stay thin and the lifecycle rules are testable without a DOM.

pub mod rover_select;
