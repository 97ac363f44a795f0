use crate::features::registry::types::{DegreeForm, FieldErrors, UniversityForm};

/// Checks the university form for missing required fields.
///
/// Presence is the only rule; format checks are the backend's concern.
pub fn validate_university_form(form: &UniversityForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if form.name.trim().is_empty() {
        errors.name = Some("University name is required".to_string());
    }
    if form.location.trim().is_empty() {
        errors.location = Some("Location is required".to_string());
    }
    if form.email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    }
    if form.logo.is_none() {
        errors.logo = Some("Logo is required".to_string());
    }
    errors
}

/// Checks the degree form for missing required fields.
pub fn validate_degree_form(form: &DegreeForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if form.link.trim().is_empty() {
        errors.link = Some("Degree link is required".to_string());
    }
    if form.issue_date.trim().is_empty() {
        errors.issue_date = Some("Issue date is required".to_string());
    }
    if form.university_id.trim().is_empty() {
        errors.university_id = Some("University must be selected".to_string());
    }
    errors
}
