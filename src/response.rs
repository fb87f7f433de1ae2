//! Response helpers shared by the JSON handlers.

use crate::service::DeleteOutcome;
use axum::{http::StatusCode, Json};

/// Delete answers with a plain message string: 200 when the row went away, 404 otherwise.
pub fn deleted(outcome: DeleteOutcome) -> (StatusCode, Json<String>) {
    let status = if outcome.removed {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Json(outcome.message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_row_is_a_404_with_the_message() {
        let (status, Json(body)) = deleted(DeleteOutcome {
            removed: false,
            message: "No student found with ID 3.".into(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "No student found with ID 3.");
    }
}
