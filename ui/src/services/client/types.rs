// Record shapes owned by the registry backend. The UI only mirrors these
// transiently: lists are re-fetched rather than patched in place.
use serde::{Deserialize, Serialize};

/// A registered university as returned by `GET /universities`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct University {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub email: String,
    /// Filename of the uploaded logo under the backend's static upload path.
    pub logo: String,
}

/// A registered degree as returned by `GET /degrees`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Degree {
    pub id: i64,
    pub link: String,
    /// Issue date as entered in the form (`YYYY-MM-DD`), rendered as stored.
    pub issue_date: String,
    pub university_id: i64,
}

/// A logo file selected in the browser, held in memory until upload.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoFile {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Payload for `POST /university` (sent as a multipart form).
#[derive(Debug, Clone, PartialEq)]
pub struct NewUniversity {
    pub name: String,
    pub location: String,
    pub email: String,
    pub logo: LogoFile,
}

/// Payload for `POST /degree`.
///
/// `university_id` carries the raw selected option value; the backend owns
/// the coercion to its key type.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewDegree {
    pub link: String,
    pub issue_date: String,
    pub university_id: String,
}

/// Error payload the backend returns on failed requests.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn university_deserializes_from_backend_row() {
        let row = json!({
            "id": 3,
            "name": "MIT",
            "location": "Cambridge",
            "email": "admin@mit.edu",
            "logo": "mit.png"
        });
        let university: University = serde_json::from_value(row).unwrap();
        assert_eq!(university.id, 3);
        assert_eq!(university.logo, "mit.png");
    }

    #[test]
    fn degree_deserializes_from_backend_row() {
        let row = json!({
            "id": 7,
            "link": "https://example.com/degree.pdf",
            "issue_date": "2024-06-01",
            "university_id": 3
        });
        let degree: Degree = serde_json::from_value(row).unwrap();
        assert_eq!(degree.university_id, 3);
        assert_eq!(degree.issue_date, "2024-06-01");
    }

    #[test]
    fn new_degree_serializes_expected_keys() {
        let request = NewDegree {
            link: "https://example.com/degree.pdf".to_string(),
            issue_date: "2024-06-01".to_string(),
            university_id: "3".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["link"], "https://example.com/degree.pdf");
        assert_eq!(value["issue_date"], "2024-06-01");
        assert_eq!(value["university_id"], "3");
    }

    #[test]
    fn error_body_defaults_when_field_missing() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, "");
    }
}
