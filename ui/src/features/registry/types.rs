// Core state types for the registry admin page - no dioxus imports needed here.
use crate::services::client::{LogoFile, University};

/// State of the university registration form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UniversityForm {
    pub name: String,
    pub location: String,
    pub email: String,
    pub logo: Option<LogoFile>,
    pub is_submitting: bool,
}

/// State of the degree registration form.
///
/// `university_id` holds the raw value of the selected option; an empty
/// string means nothing is selected yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DegreeForm {
    pub link: String,
    pub issue_date: String,
    pub university_id: String,
    pub is_submitting: bool,
}

/// Field-level validation messages, one slot per required field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub logo: Option<String>,
    pub link: Option<String>,
    pub issue_date: Option<String>,
    pub university_id: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.email.is_none()
            && self.logo.is_none()
            && self.link.is_none()
            && self.issue_date.is_none()
            && self.university_id.is_none()
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum RegistryAction {
    // University form actions
    SetUniversityName(String),
    SetUniversityLocation(String),
    SetUniversityEmail(String),
    SetUniversityLogo(Option<LogoFile>),
    SetLogoPreview(Option<String>),
    SetSubmittingUniversity(bool),
    ResetUniversityForm,

    // Degree form actions
    SetDegreeLink(String),
    SetDegreeIssueDate(String),
    SetDegreeUniversity(String),
    SetSubmittingDegree(bool),
    ResetDegreeForm,

    // Shared page state
    SetUniversities(Vec<University>),
    SetFieldErrors(FieldErrors),
    SetFormError(Option<String>),
    SetSuccessMessage(Option<String>),
}

/// Consolidated state for the registry admin page.
#[derive(Clone, Default)]
pub struct RegistryState {
    pub university_form: UniversityForm,
    pub degree_form: DegreeForm,
    pub universities: Vec<University>,
    pub field_errors: FieldErrors,
    pub form_error: Option<String>,
    pub success_message: Option<String>,
    /// Object URL of the selected logo, rendered as a local preview.
    pub logo_preview: Option<String>,
}

impl RegistryState {
    /// Reduces the state in place (preserves Dioxus Signal reactivity).
    ///
    /// Reducers are pure state transitions; browser side effects such as
    /// object URL revocation happen before the action is dispatched.
    pub fn reduce_in_place(&mut self, action: RegistryAction) {
        match action {
            // University form actions
            RegistryAction::SetUniversityName(name) => {
                self.university_form.name = name;
            }
            RegistryAction::SetUniversityLocation(location) => {
                self.university_form.location = location;
            }
            RegistryAction::SetUniversityEmail(email) => {
                self.university_form.email = email;
            }
            RegistryAction::SetUniversityLogo(logo) => {
                self.university_form.logo = logo;
            }
            RegistryAction::SetLogoPreview(preview) => {
                self.logo_preview = preview;
            }
            RegistryAction::SetSubmittingUniversity(submitting) => {
                self.university_form.is_submitting = submitting;
            }
            RegistryAction::ResetUniversityForm => {
                self.university_form = UniversityForm::default();
                self.logo_preview = None;
            }

            // Degree form actions
            RegistryAction::SetDegreeLink(link) => {
                self.degree_form.link = link;
            }
            RegistryAction::SetDegreeIssueDate(issue_date) => {
                self.degree_form.issue_date = issue_date;
            }
            RegistryAction::SetDegreeUniversity(university_id) => {
                self.degree_form.university_id = university_id;
            }
            RegistryAction::SetSubmittingDegree(submitting) => {
                self.degree_form.is_submitting = submitting;
            }
            RegistryAction::ResetDegreeForm => {
                self.degree_form = DegreeForm::default();
            }

            // Shared page state
            RegistryAction::SetUniversities(universities) => {
                self.universities = universities;
            }
            RegistryAction::SetFieldErrors(errors) => {
                self.field_errors = errors;
            }
            RegistryAction::SetFormError(error) => {
                self.form_error = error;
            }
            RegistryAction::SetSuccessMessage(message) => {
                self.success_message = message;
            }
        }
    }

    /// Whether the degree form has universities to offer in its selector.
    pub fn has_universities(&self) -> bool {
        !self.universities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> RegistryState {
        let mut state = RegistryState::default();
        state.reduce_in_place(RegistryAction::SetUniversityName("MIT".to_string()));
        state.reduce_in_place(RegistryAction::SetUniversityLocation(
            "Cambridge".to_string(),
        ));
        state.reduce_in_place(RegistryAction::SetUniversityEmail(
            "admin@mit.edu".to_string(),
        ));
        state.reduce_in_place(RegistryAction::SetUniversityLogo(Some(LogoFile {
            filename: "mit.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        })));
        state.reduce_in_place(RegistryAction::SetLogoPreview(Some(
            "blob:fake".to_string(),
        )));
        state.reduce_in_place(RegistryAction::SetDegreeLink(
            "https://example.com/degree.pdf".to_string(),
        ));
        state.reduce_in_place(RegistryAction::SetDegreeIssueDate("2024-06-01".to_string()));
        state.reduce_in_place(RegistryAction::SetDegreeUniversity("3".to_string()));
        state
    }

    #[test]
    fn set_actions_fill_the_forms() {
        let state = filled_state();
        assert_eq!(state.university_form.name, "MIT");
        assert_eq!(state.university_form.location, "Cambridge");
        assert!(state.university_form.logo.is_some());
        assert_eq!(state.logo_preview.as_deref(), Some("blob:fake"));
        assert_eq!(state.degree_form.university_id, "3");
    }

    #[test]
    fn reset_university_form_clears_fields_and_preview() {
        let mut state = filled_state();
        state.reduce_in_place(RegistryAction::ResetUniversityForm);

        assert_eq!(state.university_form, UniversityForm::default());
        assert!(state.logo_preview.is_none());
        // The degree form is independent and must survive the reset.
        assert_eq!(state.degree_form.link, "https://example.com/degree.pdf");
    }

    #[test]
    fn reset_degree_form_clears_only_degree_fields() {
        let mut state = filled_state();
        state.reduce_in_place(RegistryAction::ResetDegreeForm);

        assert_eq!(state.degree_form, DegreeForm::default());
        assert_eq!(state.university_form.name, "MIT");
        assert_eq!(state.logo_preview.as_deref(), Some("blob:fake"));
    }

    #[test]
    fn set_universities_replaces_the_list() {
        let mut state = RegistryState::default();
        assert!(!state.has_universities());

        state.reduce_in_place(RegistryAction::SetUniversities(vec![University {
            id: 1,
            name: "MIT".to_string(),
            location: "Cambridge".to_string(),
            email: "admin@mit.edu".to_string(),
            logo: "mit.png".to_string(),
        }]));
        assert!(state.has_universities());

        state.reduce_in_place(RegistryAction::SetUniversities(Vec::new()));
        assert!(!state.has_universities());
    }

    #[test]
    fn field_errors_track_emptiness() {
        let mut errors = FieldErrors::default();
        assert!(errors.is_empty());

        errors.link = Some("Degree link is required".to_string());
        assert!(!errors.is_empty());

        let mut state = RegistryState::default();
        state.reduce_in_place(RegistryAction::SetFieldErrors(errors));
        state.reduce_in_place(RegistryAction::SetFieldErrors(FieldErrors::default()));
        assert!(state.field_errors.is_empty());
    }

    #[test]
    fn messages_can_be_set_and_cleared() {
        let mut state = RegistryState::default();
        state.reduce_in_place(RegistryAction::SetSuccessMessage(Some(
            "University added successfully!".to_string(),
        )));
        state.reduce_in_place(RegistryAction::SetFormError(Some(
            "An error occurred. Please try again.".to_string(),
        )));
        assert!(state.success_message.is_some());
        assert!(state.form_error.is_some());

        state.reduce_in_place(RegistryAction::SetSuccessMessage(None));
        state.reduce_in_place(RegistryAction::SetFormError(None));
        assert!(state.success_message.is_none());
        assert!(state.form_error.is_none());
    }
}
