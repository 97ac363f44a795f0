use dioxus::prelude::*;

use crate::services::client::University;
use crate::services::config::ApiConfig;

#[derive(Props, PartialEq, Clone)]
pub struct UniversitiesTableProps {
    pub universities: Vec<University>,
}

/// Static table of the universities currently registered, with each logo
/// loaded from the backend's upload path.
#[component]
pub fn UniversitiesTable(props: UniversitiesTableProps) -> Element {
    let config = ApiConfig::default();

    rsx! {
        h2 {
            class: "table-title",
            "Universities"
        }
        table {
            class: "table",
            thead {
                tr {
                    th { "Logo" }
                    th { "University Name" }
                    th { "Location" }
                    th { "Email" }
                }
            }
            tbody {
                for university in props.universities {
                    tr {
                        key: "{university.id}",
                        td {
                            img {
                                class: "table-logo",
                                src: config.logo_url(&university.logo),
                                alt: "{university.name} logo"
                            }
                        }
                        td { "{university.name}" }
                        td { "{university.location}" }
                        td { "{university.email}" }
                    }
                }
            }
        }
    }
}
