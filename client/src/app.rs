//! Root application component and the SSR document shell.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};

use crate::components::rover_select::RoverSelect;
use crate::config::{META_TAG_NAME, RoverApiConfig};
use crate::net::types::Rover;

pub const APP_TITLE: &str = "NASA Mars Rover Photo Viewer";

/// HTML shell rendered on the server for SSR + hydration.
///
/// The rover API base URL is written into a `<meta>` tag so the browser
/// bundle can rebuild the same [`RoverApiConfig`] when it hydrates.
pub fn shell(options: LeptosOptions, config: RoverApiConfig) -> impl IntoView {
    let base_url = config.base_url().to_owned();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_TAG_NAME content=base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the rover API configuration and the selected-rover signal to
/// child components.
#[component]
pub fn App(config: RoverApiConfig) -> impl IntoView {
    provide_meta_context();

    provide_context(config);
    provide_context(RwSignal::new(None::<Rover>));

    view! {
        <Title text=APP_TITLE/>
        <main class="rover-viewer">
            <h1 class="rover-viewer__title">{APP_TITLE}</h1>
            <RoverSelect/>
        </main>
    }
}
