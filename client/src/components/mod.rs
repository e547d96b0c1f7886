//! Reusable UI component modules.

pub mod rover_select;
