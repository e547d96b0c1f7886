//! Networking modules for the rover API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends the rover-list request through a pluggable
//! transport, and `types` defines the wire schema it decodes.

pub mod api;
pub mod types;
