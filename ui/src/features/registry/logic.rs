//! Submit and fetch orchestration for the registry forms.
//!
//! Validation runs synchronously before anything touches the network; a form
//! that fails validation never issues a request. Successful submissions reset
//! their form and re-fetch the university list exactly once.

use dioxus::prelude::*;

use crate::features::registry::form_validation::{validate_degree_form, validate_university_form};
use crate::features::registry::types::{FieldErrors, RegistryAction, RegistryState};
use crate::services::client::{ApiClient, NewDegree, NewUniversity};
use crate::utils::media;
use crate::{console_error, console_info};

/// Form-level message shown for any transport or server failure.
pub const GENERIC_FORM_ERROR: &str = "An error occurred. Please try again.";

/// Success banner after a university registration.
pub const UNIVERSITY_ADDED: &str = "University added successfully!";

/// Success banner after a degree registration.
pub const DEGREE_ADDED: &str = "Degree added successfully!";

/// Fetch the university list and push it into state.
///
/// Failures are logged but not surfaced; the page keeps whatever list it
/// already has.
pub async fn refresh_universities(dispatch: EventHandler<RegistryAction>) {
    let client = ApiClient::new();
    match client.list_universities().await {
        Ok(universities) => {
            console_info!("Loaded {} universities", universities.len());
            dispatch.call(RegistryAction::SetUniversities(universities));
        }
        Err(error) => {
            console_error!("Failed to fetch universities: {}", error);
        }
    }
}

/// Validate and submit the university form.
///
/// On validation failure the field errors are dispatched and no request is
/// made. On success the form is cleared (including the logo preview, whose
/// object URL is revoked) and the university list is re-fetched once.
pub fn submit_university(state: &RegistryState, dispatch: EventHandler<RegistryAction>) {
    let errors = validate_university_form(&state.university_form);
    if !errors.is_empty() {
        dispatch.call(RegistryAction::SetFieldErrors(errors));
        return;
    }

    let Some(logo) = state.university_form.logo.clone() else {
        // validation above guarantees a selected logo
        return;
    };
    let request = NewUniversity {
        name: state.university_form.name.clone(),
        location: state.university_form.location.clone(),
        email: state.university_form.email.clone(),
        logo,
    };
    let preview = state.logo_preview.clone();

    dispatch.call(RegistryAction::SetSubmittingUniversity(true));
    dispatch.call(RegistryAction::SetSuccessMessage(None));
    dispatch.call(RegistryAction::SetFormError(None));

    spawn(async move {
        let client = ApiClient::new();
        match client.create_university(request).await {
            Ok(()) => {
                dispatch.call(RegistryAction::SetSuccessMessage(Some(
                    UNIVERSITY_ADDED.to_string(),
                )));
                dispatch.call(RegistryAction::SetFieldErrors(FieldErrors::default()));
                if let Some(url) = preview {
                    media::revoke_preview_url(&url);
                }
                dispatch.call(RegistryAction::ResetUniversityForm);
                refresh_universities(dispatch).await;
            }
            Err(error) => {
                console_error!("University submission failed: {}", error);
                dispatch.call(RegistryAction::SetFormError(Some(
                    GENERIC_FORM_ERROR.to_string(),
                )));
            }
        }
        dispatch.call(RegistryAction::SetSubmittingUniversity(false));
    });
}

/// Validate and submit the degree form.
///
/// Mirrors [`submit_university`] with a JSON payload instead of multipart.
pub fn submit_degree(state: &RegistryState, dispatch: EventHandler<RegistryAction>) {
    let errors = validate_degree_form(&state.degree_form);
    if !errors.is_empty() {
        dispatch.call(RegistryAction::SetFieldErrors(errors));
        return;
    }

    let request = NewDegree {
        link: state.degree_form.link.clone(),
        issue_date: state.degree_form.issue_date.clone(),
        university_id: state.degree_form.university_id.clone(),
    };

    dispatch.call(RegistryAction::SetSubmittingDegree(true));
    dispatch.call(RegistryAction::SetSuccessMessage(None));
    dispatch.call(RegistryAction::SetFormError(None));

    spawn(async move {
        let client = ApiClient::new();
        match client.create_degree(request).await {
            Ok(()) => {
                dispatch.call(RegistryAction::SetSuccessMessage(Some(
                    DEGREE_ADDED.to_string(),
                )));
                dispatch.call(RegistryAction::SetFieldErrors(FieldErrors::default()));
                dispatch.call(RegistryAction::ResetDegreeForm);
                refresh_universities(dispatch).await;
            }
            Err(error) => {
                console_error!("Degree submission failed: {}", error);
                dispatch.call(RegistryAction::SetFormError(Some(
                    GENERIC_FORM_ERROR.to_string(),
                )));
            }
        }
        dispatch.call(RegistryAction::SetSubmittingDegree(false));
    });
}
