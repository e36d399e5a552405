use std::sync::Arc;

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::payments::services::PaymentProcessor;

/// Request body for POST /payment
///
/// Both fields are optional so a missing field rejects with the same
/// `{success: false}` body as an invalid one.
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub method: Option<String>,
}

/// Mock payment processing
/// POST /payment
pub async fn process_payment(
    processor: web::Data<Arc<PaymentProcessor>>,
    request: Option<web::Json<PaymentRequest>>,
) -> HttpResponse {
    let receipt = request.and_then(|request| {
        let request = request.into_inner();
        match (request.amount, request.method.as_deref()) {
            (Some(amount), Some(method)) => processor.charge(amount, method),
            _ => None,
        }
    });

    match receipt {
        Some(receipt) => HttpResponse::Ok().json(receipt),
        None => HttpResponse::BadRequest().json(serde_json::json!({ "success": false })),
    }
}

/// Configure payment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/payment", web::post().to(process_payment));
}
