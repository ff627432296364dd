//! Validated JSON extractor.
//!
//! Deserializes the body and runs the `validator` rules. Malformed JSON is a
//! 400; rule violations are a 422 carrying one [`FieldError`] per failure.

use crate::responses::ApiResponse;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scribe_core::{field_errors, ErrorResponse, FieldError};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON extractor that validates the deserialized value.
///
/// ```ignore
/// async fn add_tag(ValidatedJson(request): ValidatedJson<CreateTagRequest>) {
///     // request has passed every validation rule here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for validated JSON extraction.
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// The body is not valid JSON for the target type.
    JsonError(JsonRejection),
    /// The body parsed but broke at least one rule.
    ValidationError(ValidationErrors),
}

impl ValidatedJsonRejection {
    /// Returns the field errors for a rule violation, empty for a JSON error.
    #[must_use]
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            Self::JsonError(_) => Vec::new(),
            Self::ValidationError(errors) => field_errors(errors),
        }
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match &self {
            Self::JsonError(rejection) => {
                let error_response = ErrorResponse {
                    code: "INVALID_JSON".to_string(),
                    message: format!("Invalid JSON: {}", rejection.body_text()),
                    details: None,
                    trace_id: None,
                };
                (StatusCode::BAD_REQUEST, Json(ApiResponse::error(error_response))).into_response()
            }
            Self::ValidationError(_) => {
                let error_response = ErrorResponse {
                    code: "VALIDATION_ERROR".to_string(),
                    message: "Request validation failed".to_string(),
                    details: Some(self.field_errors()),
                    trace_id: None,
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ApiResponse::error(error_response)),
                )
                    .into_response()
            }
        }
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, max = 5, message = "name must be 1-5 characters"))]
        name: String,
        #[validate(range(min = 0, max = 1))]
        state: i64,
    }

    fn json_request(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let ValidatedJson(probe) =
            ValidatedJson::<Probe>::from_request(json_request(r#"{"name":"go","state":1}"#), &())
                .await
                .unwrap();
        assert_eq!(probe.name, "go");
        assert_eq!(probe.state, 1);
    }

    #[tokio::test]
    async fn test_rule_violations_list_every_field() {
        let rejection =
            ValidatedJson::<Probe>::from_request(json_request(r#"{"name":"","state":4}"#), &())
                .await
                .unwrap_err();

        let fields: Vec<String> = rejection.field_errors().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name".to_string(), "state".to_string()]);
        assert_eq!(rejection.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let rejection = ValidatedJson::<Probe>::from_request(json_request("{"), &())
            .await
            .unwrap_err();
        assert!(rejection.field_errors().is_empty());
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
