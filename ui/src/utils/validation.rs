//! Presentation helpers for field validation state.

/// CSS class for a form input, highlighting it when its field has an error.
pub fn input_class(error: Option<&String>) -> &'static str {
    if error.is_some() {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

/// Inline style paired with [`input_class`] for invalid fields.
pub fn input_style(error: Option<&String>) -> &'static str {
    if error.is_some() {
        "border: 2px solid #ef4444; background-color: #fef2f2;"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errored_fields_get_invalid_class() {
        let error = Some("Location is required".to_string());
        assert_eq!(input_class(error.as_ref()), "input-field input-invalid");
        assert!(input_style(error.as_ref()).contains("#ef4444"));
    }

    #[test]
    fn clean_fields_get_plain_class() {
        assert_eq!(input_class(None), "input-field");
        assert_eq!(input_style(None), "");
    }
}
