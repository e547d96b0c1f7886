//! Rover selector lifecycle.
//!
//! DESIGN
//! ======
//! `Idle -> Loading -> Ready | Failed`. Each activation claims a
//! [`FetchTicket`]; a result is applied only when its ticket is still current
//! and the selector is still active. Deactivation therefore both prevents
//! late writes and lets a remount start a fresh fetch.
//!
//! [`load_rovers`] drives one activation against any [`RoverStateCell`], so
//! the component and the tests share the same sequencing.

#[cfg(test)]
#[path = "rover_select_test.rs"]
mod rover_select_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::config::RoverApiConfig;
use crate::net::api::{FetchError, HttpTransport, fetch_rovers};
use crate::net::types::Rover;

/// Proof that a fetch was claimed for a particular activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoverListStatus {
    #[default]
    Idle,
    Loading,
    Ready(Vec<Rover>),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoverSelectState {
    pub status: RoverListStatus,
    pub selected: Option<String>,
    generation: u64,
    active: bool,
}

impl RoverSelectState {
    /// Claim the fetch for this activation. Returns `None` if already active.
    pub fn activate(&mut self) -> Option<FetchTicket> {
        if self.active {
            return None;
        }
        self.active = true;
        self.generation += 1;
        self.status = RoverListStatus::Loading;
        self.selected = None;
        Some(FetchTicket(self.generation))
    }

    /// Stop accepting results. An in-flight load reverts to `Idle`.
    pub fn deactivate(&mut self) {
        self.active = false;
        if self.status == RoverListStatus::Loading {
            self.status = RoverListStatus::Idle;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Apply a fetch outcome. Returns `false` when the ticket is stale or the
    /// selector has been deactivated.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<Vec<Rover>, FetchError>) -> bool {
        if !self.active || ticket.0 != self.generation {
            return false;
        }
        self.status = match result {
            Ok(rovers) => RoverListStatus::Ready(rovers),
            Err(e) => RoverListStatus::Failed(failure_message(&e)),
        };
        true
    }

    pub fn rovers(&self) -> &[Rover] {
        match &self.status {
            RoverListStatus::Ready(rovers) => rovers,
            _ => &[],
        }
    }

    /// Select a listed rover by name; an empty name clears the selection.
    pub fn select(&mut self, name: &str) -> bool {
        if name.is_empty() {
            self.selected = None;
            return true;
        }
        if self.rovers().iter().any(|r| r.name == name) {
            self.selected = Some(name.to_owned());
            true
        } else {
            false
        }
    }

    pub fn selected_rover(&self) -> Option<&Rover> {
        let name = self.selected.as_deref()?;
        self.rovers().iter().find(|r| r.name == name)
    }
}

pub fn failure_message(err: &FetchError) -> String {
    format!("Unable to load rovers: {err}")
}

/// Somewhere a [`RoverSelectState`] can be updated in place.
pub trait RoverStateCell {
    /// Run `f` against the state; `None` if the state is gone.
    fn update_state<R>(&self, f: impl FnOnce(&mut RoverSelectState) -> R) -> Option<R>;
}

impl RoverStateCell for RwSignal<RoverSelectState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut RoverSelectState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl RoverStateCell for RefCell<RoverSelectState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut RoverSelectState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one activation: claim a ticket, fetch once, apply the outcome.
///
/// Returns `true` when a result was applied. Nothing is fetched when the
/// state is already active.
pub async fn load_rovers<S, T>(state: &S, transport: &T, config: &RoverApiConfig) -> bool
where
    S: RoverStateCell,
    T: HttpTransport,
{
    let Some(ticket) = state.update_state(RoverSelectState::activate).flatten() else {
        return false;
    };

    let result = fetch_rovers(transport, config).await;
    match &result {
        Ok(rovers) => log::info!("loaded {} rover(s)", rovers.len()),
        Err(e) => log::warn!("rover list request failed: {e}"),
    }

    let applied = state.update_state(|s| s.resolve(ticket, result)).unwrap_or(false);
    if !applied {
        log::debug!("discarding rover list for inactive selector");
    }
    applied
}
