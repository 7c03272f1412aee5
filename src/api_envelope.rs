use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

pub type ApiErrorTuple = (StatusCode, Json<ApiErrorBody>);

/// The error wire shape every `/api` route shares: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ApiSuccessBody {
    pub success: bool,
}

pub fn invalid_request() -> ApiErrorTuple {
    error_response(StatusCode::BAD_REQUEST, "Invalid request")
}

pub fn not_found(message: &str) -> ApiErrorTuple {
    error_response(StatusCode::NOT_FOUND, message)
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiErrorTuple {
    (
        status,
        Json(ApiErrorBody {
            error: message.into(),
        }),
    )
}

/// Delete responses report `{"success": true}` regardless of whether the
/// record existed.
pub fn success() -> (StatusCode, Json<ApiSuccessBody>) {
    (StatusCode::OK, Json(ApiSuccessBody { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_expected_shape() {
        let (status, payload) = invalid_request();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body = serde_json::to_value(payload.0).expect("serialize payload");
        assert_eq!(body["error"], "Invalid request");
    }

    #[test]
    fn success_body_is_fixed() {
        let (status, payload) = success();
        assert_eq!(status, StatusCode::OK);
        let body = serde_json::to_value(payload.0).expect("serialize payload");
        assert_eq!(body, serde_json::json!({"success": true}));
    }
}
