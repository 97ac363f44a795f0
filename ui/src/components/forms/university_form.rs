use dioxus::prelude::*;

use crate::components::display::LogoPreview;
use crate::components::inputs::{FieldError, InputType, ValidatedInput};
use crate::console_warn;
use crate::features::registry::logic::submit_university;
use crate::features::registry::types::{RegistryAction, RegistryState};
use crate::services::client::LogoFile;
use crate::utils::media;
use crate::utils::validation::{input_class, input_style};

#[derive(Props, PartialEq, Clone)]
pub struct UniversityFormProps {
    pub state: Signal<RegistryState>,
    pub dispatch: EventHandler<RegistryAction>,
}

/// Registration form for a university: name, location, contact email, and a
/// logo file that is previewed locally before upload.
#[component]
pub fn UniversityForm(props: UniversityFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    rsx! {
        form {
            class: "form",
            onsubmit: move |event| {
                event.prevent_default();
                submit_university(&state(), dispatch);
            },

            h2 { "Add University" }

            div {
                class: "form-group",
                label {
                    class: "input-label",
                    "University Name:"
                }
                ValidatedInput {
                    name: "name".to_string(),
                    value: state().university_form.name,
                    input_type: InputType::Text,
                    input_class: input_class(state().field_errors.name.as_ref()).to_string(),
                    input_style: input_style(state().field_errors.name.as_ref()).to_string(),
                    disabled: state().university_form.is_submitting,
                    on_change: move |value: String| {
                        dispatch.call(RegistryAction::SetUniversityName(value));
                    }
                }
                FieldError { message: state().field_errors.name }
            }

            div {
                class: "form-group",
                label {
                    class: "input-label",
                    "Location:"
                }
                ValidatedInput {
                    name: "location".to_string(),
                    value: state().university_form.location,
                    input_type: InputType::Text,
                    input_class: input_class(state().field_errors.location.as_ref()).to_string(),
                    input_style: input_style(state().field_errors.location.as_ref()).to_string(),
                    disabled: state().university_form.is_submitting,
                    on_change: move |value: String| {
                        dispatch.call(RegistryAction::SetUniversityLocation(value));
                    }
                }
                FieldError { message: state().field_errors.location }
            }

            div {
                class: "form-group",
                label {
                    class: "input-label",
                    "Email:"
                }
                ValidatedInput {
                    name: "email".to_string(),
                    value: state().university_form.email,
                    input_type: InputType::Email,
                    input_class: input_class(state().field_errors.email.as_ref()).to_string(),
                    input_style: input_style(state().field_errors.email.as_ref()).to_string(),
                    disabled: state().university_form.is_submitting,
                    on_change: move |value: String| {
                        dispatch.call(RegistryAction::SetUniversityEmail(value));
                    }
                }
                FieldError { message: state().field_errors.email }
            }

            div {
                class: "form-group",
                label {
                    class: "input-label",
                    "University Logo:"
                }
                input {
                    r#type: "file",
                    name: "logo",
                    accept: "image/*",
                    class: "input-file",
                    disabled: state().university_form.is_submitting,
                    onchange: move |event| {
                        let Some(file_engine) = event.files() else {
                            return;
                        };
                        let Some(filename) = file_engine.files().into_iter().next() else {
                            return;
                        };
                        spawn(async move {
                            let Some(bytes) = file_engine.read_file(&filename).await else {
                                console_warn!("Could not read selected logo file: {}", filename);
                                return;
                            };
                            let mime = media::mime_for_filename(&filename).to_string();

                            // Replace any previous preview before installing the new one.
                            if let Some(previous) = state().logo_preview {
                                media::revoke_preview_url(&previous);
                            }
                            match media::create_preview_url(&bytes, &mime) {
                                Ok(url) => {
                                    dispatch.call(RegistryAction::SetLogoPreview(Some(url)));
                                }
                                Err(error) => {
                                    console_warn!("Could not create logo preview: {:?}", error);
                                    dispatch.call(RegistryAction::SetLogoPreview(None));
                                }
                            }
                            dispatch.call(RegistryAction::SetUniversityLogo(Some(LogoFile {
                                filename,
                                mime,
                                bytes,
                            })));
                        });
                    }
                }
                FieldError { message: state().field_errors.logo }
                if let Some(url) = state().logo_preview {
                    LogoPreview { url }
                }
            }

            button {
                r#type: "submit",
                class: "submit-button",
                disabled: state().university_form.is_submitting,
                if state().university_form.is_submitting {
                    "Submitting..."
                } else {
                    "Add University"
                }
            }
        }
    }
}
