use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
#[cfg(feature = "ssr")]
use http::StatusCode;
#[cfg(feature = "ssr")]
use regex::Regex;
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

pub const CONTACT_PATH: &str = "/api/contact";
pub const ACCEPTED_MESSAGE: &str = "Message received successfully";

#[cfg(feature = "ssr")]
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// Body of `POST /api/contact`. Missing and `null` fields both deserialize to
/// `None` so they fail validation rather than parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Submission {
    pub fn from_line(&self) -> String {
        format!("{} {} <{}>", self.first_name, self.last_name, self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    /// The detail is for the server log only.
    #[error("Internal server error")]
    Internal(String),
}

#[cfg(feature = "ssr")]
impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::InvalidEmail => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(feature = "ssr")]
impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!(%detail, "contact form error");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(feature = "ssr")]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Presence first, then email shape.
#[cfg(feature = "ssr")]
pub fn validate(req: ContactRequest) -> Result<Submission, ContactError> {
    let present = |field: Option<String>| field.filter(|s| !s.is_empty());
    let (Some(first_name), Some(last_name), Some(email), Some(subject), Some(message)) = (
        present(req.first_name),
        present(req.last_name),
        present(req.email),
        present(req.subject),
        present(req.message),
    ) else {
        return Err(ContactError::MissingFields);
    };
    if !is_valid_email(&email) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(Submission {
        first_name,
        last_name,
        email,
        subject,
        message,
    })
}

/// Validates and records a submission. Nothing is stored or delivered; the
/// log event is the only trace.
#[cfg(feature = "ssr")]
pub fn accept(req: ContactRequest) -> Result<ContactAck, ContactError> {
    let sub = validate(req)?;
    tracing::info!(
        from = %sub.from_line(),
        subject = %sub.subject,
        message = %sub.message,
        timestamp = %chrono::Utc::now().to_rfc3339(),
        "contact form submission"
    );
    Ok(ContactAck {
        success: true,
        message: ACCEPTED_MESSAGE.to_string(),
    })
}

#[cfg(feature = "ssr")]
pub async fn submit(
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactAck>, ContactError> {
    let Json(req) = payload.map_err(|rejection| ContactError::Internal(rejection.body_text()))?;
    accept(req).map(Json)
}

#[cfg(feature = "ssr")]
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(CONTACT_PATH, post(submit))
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use axum::body::{to_bytes, Body};
    use http::{header, Request};
    use tower::ServiceExt;

    use super::*;

    fn request(first: &str, last: &str, email: &str, subject: &str, message: &str) -> ContactRequest {
        ContactRequest {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            email: Some(email.to_string()),
            subject: Some(subject.to_string()),
            message: Some(message.to_string()),
        }
    }

    async fn post_raw(body: &str) -> (StatusCode, serde_json::Value) {
        let req = Request::builder()
            .method("POST")
            .uri(CONTACT_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let res = routes::<()>().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_missing_field() {
        let res = validate(request("", "Doe", "a@b.com", "Hi", "Hello"));
        assert_eq!(res, Err(ContactError::MissingFields));
        let res = validate(ContactRequest {
            message: None,
            ..request("Jane", "Doe", "a@b.com", "Hi", "x")
        });
        assert_eq!(res, Err(ContactError::MissingFields));
    }

    #[test]
    fn test_presence_checked_before_email() {
        let res = validate(request("Jane", "", "not-an-email", "Hi", "Hello"));
        assert_eq!(res, Err(ContactError::MissingFields));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("@example.com"));
        let res = validate(request("Jane", "Doe", "not-an-email", "Hi", "Hello"));
        assert_eq!(res, Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_accept() {
        let ack = accept(request("Jane", "Doe", "jane@example.com", "Hi", "Hello")).unwrap();
        assert!(ack.success);
        assert_eq!(ack.message, ACCEPTED_MESSAGE);
    }

    #[test]
    fn test_from_line() {
        let sub = validate(request("Jane", "Doe", "jane@example.com", "Hi", "Hello")).unwrap();
        assert_eq!(sub.from_line(), "Jane Doe <jane@example.com>");
    }

    #[tokio::test]
    async fn test_post_missing_field() {
        let (status, body) = post_raw(
            r#"{"firstName":"","lastName":"Doe","email":"a@b.com","subject":"Hi","message":"Hello"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "All fields are required");
    }

    #[tokio::test]
    async fn test_post_absent_field() {
        let (status, body) =
            post_raw(r#"{"lastName":"Doe","email":"a@b.com","subject":"Hi","message":null}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "All fields are required");
    }

    #[tokio::test]
    async fn test_post_invalid_email() {
        let (status, body) = post_raw(
            r#"{"firstName":"Jane","lastName":"Doe","email":"not-an-email","subject":"Hi","message":"Hello"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email format");
    }

    #[tokio::test]
    async fn test_post_accepted() {
        let (status, body) = post_raw(
            r#"{"firstName":"Jane","lastName":"Doe","email":"jane@example.com","subject":"Hi","message":"Hello"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], ACCEPTED_MESSAGE);
    }

    #[tokio::test]
    async fn test_post_malformed_json() {
        let (status, body) = post_raw(r#"{"firstName": "Jane", "#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_post_wrong_types() {
        let (status, body) = post_raw(
            r#"{"firstName":42,"lastName":"Doe","email":"a@b.com","subject":"Hi","message":"Hello"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_post_without_body() {
        let req = Request::builder()
            .method("POST")
            .uri(CONTACT_PATH)
            .body(Body::empty())
            .unwrap();
        let res = routes::<()>().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"error":"Internal server error"}"#);
    }
}
