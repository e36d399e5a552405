use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::modules::notifications::services::EmailNotifier;

/// Request body for POST /notify/email
#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub email: String,
    pub message: String,
}

/// Mock email notification
/// POST /notify/email
pub async fn notify_email(
    notifier: web::Data<Arc<EmailNotifier>>,
    request: web::Json<EmailRequest>,
) -> HttpResponse {
    notifier.send(&request.email, &request.message);

    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}

/// Configure notification routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/notify").route("/email", web::post().to(notify_email)));
}
