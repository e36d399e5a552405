use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::{Map, Value};

use crate::core::error::AppError;
use crate::modules::orders::repositories::{CartRepository, OrderRepository};

/// Append order items to the cart
/// POST /order/addToCart
pub async fn add_to_cart(
    cart: web::Data<Arc<dyn CartRepository>>,
    body: Option<web::Json<Value>>,
) -> Result<HttpResponse, AppError> {
    let Some(body) = body else {
        return Err(AppError::validation("No product(s) details provided"));
    };
    let Value::Array(items) = body.into_inner() else {
        return Err(AppError::validation("No product(s) details provided"));
    };

    let added = items.len();
    cart.append_items(items).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "statusMessage": format!("Added {added} item(s) to cart"),
    })))
}

/// Record an order in the order management sink
/// POST /oms/order
///
/// No field validation: the submitted object is persisted as-is with a
/// generated sequential id.
pub async fn place_order(
    orders: web::Data<Arc<dyn OrderRepository>>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let order_id = orders.append(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "orderId": order_id,
    })))
}

/// Configure order routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/order").route("/addToCart", web::post().to(add_to_cart)))
        .service(web::scope("/oms").route("/order", web::post().to(place_order)));
}
