use dioxus::prelude::*;

use crate::components::inputs::{FieldError, InputType, ValidatedInput};
use crate::features::registry::logic::submit_degree;
use crate::features::registry::types::{RegistryAction, RegistryState};
use crate::utils::validation::{input_class, input_style};

#[derive(Props, PartialEq, Clone)]
pub struct DegreeFormProps {
    pub state: Signal<RegistryState>,
    pub dispatch: EventHandler<RegistryAction>,
}

/// Registration form for a degree: document link, issue date, and the
/// university it belongs to, picked from the fetched list.
#[component]
pub fn DegreeForm(props: DegreeFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    rsx! {
        form {
            class: "form",
            onsubmit: move |event| {
                event.prevent_default();
                submit_degree(&state(), dispatch);
            },

            h2 { "Add Degree" }

            div {
                class: "form-group",
                label {
                    class: "input-label",
                    "Degree Link:"
                }
                ValidatedInput {
                    name: "link".to_string(),
                    value: state().degree_form.link,
                    input_type: InputType::Text,
                    input_class: input_class(state().field_errors.link.as_ref()).to_string(),
                    input_style: input_style(state().field_errors.link.as_ref()).to_string(),
                    disabled: state().degree_form.is_submitting,
                    on_change: move |value: String| {
                        dispatch.call(RegistryAction::SetDegreeLink(value));
                    }
                }
                FieldError { message: state().field_errors.link }
            }

            div {
                class: "form-group",
                label {
                    class: "input-label",
                    "Issue Date:"
                }
                ValidatedInput {
                    name: "issue_date".to_string(),
                    value: state().degree_form.issue_date,
                    input_type: InputType::Date,
                    input_class: input_class(state().field_errors.issue_date.as_ref()).to_string(),
                    input_style: input_style(state().field_errors.issue_date.as_ref()).to_string(),
                    disabled: state().degree_form.is_submitting,
                    on_change: move |value: String| {
                        dispatch.call(RegistryAction::SetDegreeIssueDate(value));
                    }
                }
                FieldError { message: state().field_errors.issue_date }
            }

            div {
                class: "form-group",
                label {
                    class: "input-label",
                    "University:"
                }
                select {
                    name: "university_id",
                    class: input_class(state().field_errors.university_id.as_ref()),
                    style: input_style(state().field_errors.university_id.as_ref()),
                    value: "{state().degree_form.university_id}",
                    disabled: state().degree_form.is_submitting,
                    onchange: move |event| {
                        dispatch.call(RegistryAction::SetDegreeUniversity(event.value()));
                    },
                    option {
                        value: "",
                        "Select a university"
                    }
                    for university in state().universities {
                        option {
                            value: "{university.id}",
                            selected: university.id.to_string() == state().degree_form.university_id,
                            "{university.name}"
                        }
                    }
                }
                FieldError { message: state().field_errors.university_id }
            }

            button {
                r#type: "submit",
                class: "submit-button",
                disabled: state().degree_form.is_submitting,
                if state().degree_form.is_submitting {
                    "Submitting..."
                } else {
                    "Add Degree"
                }
            }
        }
    }
}
