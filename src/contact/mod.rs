// SPDX-License-Identifier: MPL-2.0
//! Contact form submission.
//!
//! The form posts a JSON body to a mail relay endpoint, which answers with
//! `{"message": ...}` on success or `{"error": ...}` alongside a 4xx/5xx
//! status.

use crate::error::ContactError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// Kind of project the visitor is enquiring about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Residential,
    Commercial,
    Interior,
    Renovation,
    Consultation,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        ProjectType::Residential,
        ProjectType::Commercial,
        ProjectType::Interior,
        ProjectType::Renovation,
        ProjectType::Consultation,
        ProjectType::Other,
    ];

    pub fn i18n_key(self) -> &'static str {
        match self {
            ProjectType::Residential => "contact-form-residential",
            ProjectType::Commercial => "contact-form-commercial",
            ProjectType::Interior => "contact-form-interior",
            ProjectType::Renovation => "contact-form-renovation",
            ProjectType::Consultation => "contact-form-consultation",
            ProjectType::Other => "contact-form-other",
        }
    }

    /// Value sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Residential => "residential",
            ProjectType::Commercial => "commercial",
            ProjectType::Interior => "interior",
            ProjectType::Renovation => "renovation",
            ProjectType::Consultation => "consultation",
            ProjectType::Other => "other",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub project_type: Option<ProjectType>,
    pub message: String,
}

impl ContactRequest {
    /// Trims every field and checks that the request can be sent.
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingFields`] when any field is blank or no project
    /// type was chosen, [`ContactError::InvalidEmail`] when the address does
    /// not look like `local@domain.tld`.
    pub fn validate(self) -> Result<Self, ContactError> {
        let request = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            project_type: self.project_type,
            message: self.message.trim().to_string(),
        };

        if request.name.is_empty()
            || request.email.is_empty()
            || request.message.is_empty()
            || request.project_type.is_none()
        {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&request.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(request)
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    message: Option<String>,
    error: Option<String>,
}

/// Interprets the endpoint's answer.
///
/// Returns the server's confirmation message on success.
///
/// # Errors
///
/// [`ContactError::Rejected`] with the server's `error` text on a non-success
/// status, [`ContactError::MalformedResponse`] when the body matches neither
/// shape.
pub fn interpret_response(success: bool, body: &str) -> Result<String, ContactError> {
    let parsed: ResponseBody = serde_json::from_str(body)
        .map_err(|e| ContactError::MalformedResponse(e.to_string()))?;

    match (success, parsed.message, parsed.error) {
        (true, Some(message), _) => Ok(message),
        (false, _, Some(error)) => Err(ContactError::Rejected(error)),
        (true, None, Some(error)) => Err(ContactError::Rejected(error)),
        (_, _, _) => Err(ContactError::MalformedResponse(body.to_string())),
    }
}

/// Validates and posts a contact request.
///
/// # Errors
///
/// Validation errors are returned before any network activity. Connection
/// failures and timeouts map to [`ContactError::Transport`].
pub async fn submit(
    endpoint: String,
    timeout: Duration,
    request: ContactRequest,
) -> Result<String, ContactError> {
    let request = request.validate()?;

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("Atelier/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ContactError::Transport(e.to_string()))?;

    tracing::debug!(endpoint = %endpoint, "submitting contact request");

    let response = client
        .post(&endpoint)
        .json(&request)
        .send()
        .await
        .map_err(|e| ContactError::Transport(e.to_string()))?;

    let success = response.status().is_success();
    let body = response
        .text()
        .await
        .map_err(|e| ContactError::Transport(e.to_string()))?;

    let outcome = interpret_response(success, &body);
    if let Err(err) = &outcome {
        tracing::warn!(error = %err, "contact request failed");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "  Ayşe Demir ".into(),
            email: " ayse@example.com ".into(),
            project_type: Some(ProjectType::Renovation),
            message: "A villa in Urla.\n".into(),
        }
    }

    #[test]
    fn validate_trims_fields() {
        let validated = request().validate().expect("valid request");
        assert_eq!(validated.name, "Ayşe Demir");
        assert_eq!(validated.email, "ayse@example.com");
        assert_eq!(validated.message, "A villa in Urla.");
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut blank_name = request();
        blank_name.name = "   ".into();
        assert_eq!(blank_name.validate(), Err(ContactError::MissingFields));

        let mut no_type = request();
        no_type.project_type = None;
        assert_eq!(no_type.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ayse", "ayse@example", "a b@example.com", "@example.com"] {
            let mut bad = request();
            bad.email = email.into();
            assert_eq!(bad.validate(), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn well_formed_addresses_are_accepted() {
        for email in ["ayse@example.com", "a.b+c@studio.com.tr"] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(request()).expect("serialize");
        assert_eq!(json["projectType"], "renovation");
        assert!(json.get("project_type").is_none());
    }

    #[test]
    fn success_body_yields_message() {
        let outcome = interpret_response(true, r#"{"message":"Email sent successfully"}"#);
        assert_eq!(outcome, Ok("Email sent successfully".to_string()));
    }

    #[test]
    fn error_body_is_rejection() {
        let outcome = interpret_response(false, r#"{"error":"Server configuration error"}"#);
        assert_eq!(
            outcome,
            Err(ContactError::Rejected("Server configuration error".into()))
        );
    }

    #[test]
    fn unexpected_bodies_are_malformed() {
        assert!(matches!(
            interpret_response(true, "<html>"),
            Err(ContactError::MalformedResponse(_))
        ));
        assert!(matches!(
            interpret_response(false, r#"{"message":"ok"}"#),
            Err(ContactError::MalformedResponse(_))
        ));
    }

    #[test]
    fn project_types_have_distinct_keys() {
        let mut keys: Vec<_> = ProjectType::ALL.iter().map(|t| t.i18n_key()).collect();
        keys.dedup();
        assert_eq!(keys.len(), ProjectType::ALL.len());
    }

    #[tokio::test]
    async fn submit_validates_before_sending() {
        let mut bad = request();
        bad.email = "not-an-email".into();
        let outcome = submit(
            "http://127.0.0.1:9/contact".into(),
            Duration::from_millis(200),
            bad,
        )
        .await;
        assert_eq!(outcome, Err(ContactError::InvalidEmail));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        let outcome = submit(
            "http://127.0.0.1:9/contact".into(),
            Duration::from_millis(500),
            request(),
        )
        .await;
        assert!(matches!(outcome, Err(ContactError::Transport(_))));
    }
}
