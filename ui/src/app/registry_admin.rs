use dioxus::prelude::*;

use crate::components::display::{DegreesList, UniversitiesTable};
use crate::components::forms::{DegreeForm, UniversityForm};
use crate::features::registry::logic::refresh_universities;
use crate::features::registry::types::{RegistryAction, RegistryState};

const REGISTRY_ADMIN_CSS: Asset = asset!("/assets/styling/registry_admin.css");

/// Admin page for registering universities and degrees.
///
/// Holds the consolidated page state and wires the two forms, the banners,
/// the universities table, and the degrees listing together. The university
/// list is fetched once on mount and re-fetched after every successful
/// submission.
#[component]
pub fn RegistryAdmin() -> Element {
    // Consolidated state management
    let mut state = use_signal(RegistryState::default);

    // Dispatch function for actions - using in-place reduction to preserve
    // Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegistryAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    // Populate the university selector and table on mount
    use_effect(move || {
        spawn(async move {
            refresh_universities(dispatch).await;
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: REGISTRY_ADMIN_CSS }

        div {
            class: "container",

            h1 {
                class: "title",
                "Add University and Degree"
            }

            UniversityForm {
                state: state,
                dispatch: dispatch
            }

            DegreeForm {
                state: state,
                dispatch: dispatch
            }

            if let Some(message) = state().success_message {
                p {
                    class: "success-message",
                    "{message}"
                }
            }
            if let Some(message) = state().form_error {
                p {
                    class: "error-message",
                    "{message}"
                }
            }

            UniversitiesTable { universities: state().universities }

            div {
                h1 { "Existing Degrees" }
                DegreesList {}
            }
        }
    }
}
