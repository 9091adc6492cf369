//! Endpoint paths and wire types for the activities backend.

mod error;

pub use error::ApiError;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Read endpoint for the full activity catalog.
pub const CATALOG_PATH: &str = "/activities";

/// Characters escaped when an activity name or email is interpolated into a
/// path segment or query value. Everything except ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )` is percent-encoded, so spaces, `/`, `@`, `?` and `&`
/// cannot corrupt the request target.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// `POST /activities/{name}/signup?email={email}`
pub fn signup_path(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

/// `POST /activities/{name}/unregister?email={email}`
pub fn unregister_path(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/unregister?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

/// 2xx sign-up response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupConfirmation {
    pub message: String,
}

/// Non-2xx response body. `detail` is optional; the UI falls back to a
/// generic message when it is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_path_encodes_space_and_at_sign() {
        assert_eq!(
            signup_path("Chess Club", "a@b.com"),
            "/activities/Chess%20Club/signup?email=a%40b.com"
        );
    }

    #[test]
    fn test_unregister_path_encodes_space_and_at_sign() {
        assert_eq!(
            unregister_path("Chess Club", "michael@mergington.edu"),
            "/activities/Chess%20Club/unregister?email=michael%40mergington.edu"
        );
    }

    #[test]
    fn test_encode_component_escapes_delimiters() {
        assert_eq!(encode_component("a/b"), "a%2Fb");
        assert_eq!(encode_component("a?b=c"), "a%3Fb%3Dc");
        assert_eq!(encode_component("a&b"), "a%26b");
        assert_eq!(encode_component("a#b"), "a%23b");
    }

    #[test]
    fn test_encode_component_leaves_unreserved_marks_alone() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_component("AZaz09"), "AZaz09");
    }

    #[test]
    fn test_encode_component_handles_non_ascii() {
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_deserialize_signup_confirmation() {
        let body: SignupConfirmation =
            serde_json::from_str(r#"{"message": "Signed up a@b.com for Chess Club"}"#).unwrap();
        assert_eq!(body.message, "Signed up a@b.com for Chess Club");
    }

    #[test]
    fn test_deserialize_error_body() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "Student is already signed up"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("Student is already signed up"));
    }

    #[test]
    fn test_deserialize_error_body_without_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail, None);
    }
}
