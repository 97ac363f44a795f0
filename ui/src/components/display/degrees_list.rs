use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::console_error;
use crate::services::client::{ApiClient, Degree};

/// Read-only listing of all registered degrees.
///
/// Fetches the collection once on mount. While the request is pending a
/// loading indicator is shown; a failure is reduced to the backend's reported
/// message (or the transport error text) and rendered inline. An empty
/// collection renders a "no data" message rather than an empty table.
#[component]
pub fn DegreesList() -> Element {
    let mut degrees = use_signal(Vec::<Degree>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        spawn(async move {
            let client = ApiClient::new();
            match client.list_degrees().await {
                Ok(rows) => degrees.set(rows),
                Err(fetch_error) => {
                    console_error!("Failed to fetch degrees: {}", fetch_error);
                    error.set(Some(fetch_error.to_string()));
                }
            }
            loading.set(false);
        });
    });

    if loading() {
        return rsx! {
            LoadingIndicator { message: "Loading degrees...".to_string() }
        };
    }

    if let Some(message) = error() {
        return rsx! {
            p {
                class: "error-message",
                "Error: {message}"
            }
        };
    }

    rsx! {
        div {
            class: "degrees-container",

            h2 { "Degrees List" }

            if degrees().is_empty() {
                p { "No degrees found." }
            } else {
                table {
                    class: "degrees-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Link" }
                            th { "Issue Date" }
                            th { "University ID" }
                        }
                    }
                    tbody {
                        for degree in degrees() {
                            tr {
                                key: "{degree.id}",
                                td { "{degree.id}" }
                                td {
                                    a {
                                        class: "degree-link",
                                        href: "{degree.link}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "{degree.link}"
                                    }
                                }
                                td { "{degree.issue_date}" }
                                td { "{degree.university_id}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
