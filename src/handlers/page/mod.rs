//! Server-rendered pages under `/StudentPage`, `/TeacherPage` and `/CoursePage`.
//!
//! Form posts redirect: a successful write lands on the record's detail page, a rejected one
//! on the section's `Validation` page with the rule code in the query string.

pub mod course;
pub mod student;
pub mod teacher;

use crate::error::AppError;
use crate::service::ValidationError;
use crate::view;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

/// Error type for page handlers: renders HTML instead of the JSON error body.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        PageError(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, view::not_found(&message)).into_response(),
            AppError::Validation(e) => {
                (StatusCode::UNPROCESSABLE_ENTITY, view::validation("Invalid input", &e.to_string(), "/")).into_response()
            }
            other => {
                let (status, code) = other.status();
                tracing::error!(error = %other, code, "page request failed");
                (status, view::server_error()).into_response()
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ValidationQuery {
    pub error: Option<String>,
}

impl ValidationQuery {
    pub fn message(&self) -> String {
        self.error
            .as_deref()
            .and_then(ValidationError::from_code)
            .map(|e| e.to_string())
            .unwrap_or_else(|| "The submitted form was not valid.".to_string())
    }
}

pub(crate) fn rejected(base: &str, e: ValidationError) -> Redirect {
    Redirect::to(&format!("{base}/Validation?error={}", e.code()))
}

/// Where a form post goes next, given the id it wrote (or why it was refused).
pub(crate) fn after_write(base: &str, written: Result<i32, AppError>) -> Result<Redirect, PageError> {
    match written {
        Ok(id) => Ok(Redirect::to(&format!("{base}/Show/{id}"))),
        Err(AppError::Validation(e)) => Ok(rejected(base, e)),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(r: Redirect) -> String {
        let res = r.into_response();
        res.headers()["location"].to_str().unwrap().to_string()
    }

    #[test]
    fn validation_failure_redirects_with_the_rule_code() {
        let r = after_write("/StudentPage", Err(ValidationError::StudentNumberTaken.into())).unwrap();
        assert_eq!(location(r), "/StudentPage/Validation?error=student_number_taken");
    }

    #[test]
    fn success_redirects_to_the_detail_page() {
        let r = after_write("/CoursePage", Ok(12)).unwrap();
        assert_eq!(location(r), "/CoursePage/Show/12");
    }

    #[test]
    fn unknown_codes_fall_back_to_a_generic_message() {
        let q = ValidationQuery { error: Some("bogus".into()) };
        assert_eq!(q.message(), "The submitted form was not valid.");
        let q = ValidationQuery { error: Some("course_name_empty".into()) };
        assert_eq!(q.message(), "Course name cannot be empty.");
    }
}
