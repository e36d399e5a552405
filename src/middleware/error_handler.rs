use actix_web::{
    error::{InternalError, JsonPayloadError},
    Error, HttpRequest, HttpResponse,
};

/// Convert JSON payload failures into the service's `statusMessage`
/// envelope instead of actix's plain-text default
///
/// Registered via `web::JsonConfig::default().error_handler(..)`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Expected a JSON request body".to_string(),
        other => other.to_string(),
    };

    tracing::debug!("Rejected request payload: {}", message);

    let response = HttpResponse::BadRequest().json(serde_json::json!({
        "statusMessage": message,
    }));

    InternalError::from_response(err, response).into()
}
