//! Rover picker fed by the rover API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads [`RoverApiConfig`](crate::config::RoverApiConfig) and the shared selected-rover signal from context
//! (both provided by `App`). In the browser the component starts one fetch on
//! mount and cancels it on cleanup; during SSR it renders the loading
//! placeholder and never touches the network.

#[cfg(test)]
#[path = "rover_select_test.rs"]
mod rover_select_test;

use leptos::prelude::*;

use crate::net::types::Rover;
use crate::state::rover_select::{RoverListStatus, RoverSelectState};

pub const PLACEHOLDER_LABEL: &str = "Select a rover";
pub const LOADING_LABEL: &str = "Loading rovers...";
pub const EMPTY_LABEL: &str = "No rovers available";

/// Label for the disabled leading `<option>`, or `None` when the select
/// should not render at all.
pub fn placeholder_label(status: &RoverListStatus) -> Option<&'static str> {
    match status {
        RoverListStatus::Idle | RoverListStatus::Loading => Some(LOADING_LABEL),
        RoverListStatus::Ready(rovers) if rovers.is_empty() => Some(EMPTY_LABEL),
        RoverListStatus::Ready(_) => Some(PLACEHOLDER_LABEL),
        RoverListStatus::Failed(_) => None,
    }
}

/// The `<select>` is interactive only once a non-empty list has loaded.
pub fn is_selectable(status: &RoverListStatus) -> bool {
    matches!(status, RoverListStatus::Ready(rovers) if !rovers.is_empty())
}

/// Value the `<select>` should show: the stored selection, or `""` for the
/// placeholder.
pub fn selected_value(state: &RoverSelectState) -> String {
    state.selected_rover().map(|r| r.name.clone()).unwrap_or_default()
}

/// Rover `<select>` populated from the rover API.
#[component]
pub fn RoverSelect() -> impl IntoView {
    let selected_rover = use_context::<RwSignal<Option<Rover>>>();
    let state = RwSignal::new(RoverSelectState::default());

    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<crate::config::RoverApiConfig>();
        let (task, abort) = futures::future::abortable(async move {
            crate::state::rover_select::load_rovers(&state, &crate::net::api::BrowserTransport, &config).await
        });
        leptos::task::spawn_local(async move {
            let _ = task.await;
        });
        on_cleanup(move || {
            abort.abort();
            let _ = state.try_update(RoverSelectState::deactivate);
        });
    }

    let on_change = move |ev: leptos::ev::Event| {
        let name = event_target_value(&ev);
        let chosen = state
            .try_update(|s| if s.select(&name) { s.selected_rover().cloned() } else { None })
            .flatten();
        if let Some(signal) = selected_rover {
            signal.set(chosen);
        }
    };

    view! {
        <div class="rover-select">
            <label class="rover-select__label" for="rover-select">"Rover"</label>
            {move || {
                let status = state.with(|s| s.status.clone());
                match status {
                    RoverListStatus::Failed(message) => {
                        view! { <p class="rover-select__error" role="alert">{message}</p> }.into_any()
                    }
                    status => {
                        let placeholder = placeholder_label(&status).unwrap_or(PLACEHOLDER_LABEL);
                        let disabled = !is_selectable(&status);
                        let options = match status {
                            RoverListStatus::Ready(rovers) => rovers,
                            _ => Vec::new(),
                        };
                        view! {
                            <select
                                id="rover-select"
                                class="rover-select__input"
                                disabled=disabled
                                prop:value=move || state.with(selected_value)
                                on:change=on_change
                            >
                                <option
                                    value=""
                                    disabled=true
                                    selected=move || state.with(|s| s.selected.is_none())
                                >
                                    {placeholder}
                                </option>
                                {options
                                    .into_iter()
                                    .map(|r| {
                                        let value = r.name.clone();
                                        view! { <option value=value>{r.name}</option> }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
