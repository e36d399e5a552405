use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::core::error::AppError;
use crate::modules::products::models::NewProductRequest;
use crate::modules::products::services::CatalogService;

/// Look up a product with its inventory stock
/// GET /product/{productId}
pub async fn get_product(
    catalog: web::Data<Arc<CatalogService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw = path.into_inner();
    let id = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::not_found(format!("No product with id {raw}")))?;

    let product = catalog.product_by_id(id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "product": product })))
}

/// The full catalog
/// GET /products/allProducts
pub async fn get_all_products(
    catalog: web::Data<Arc<CatalogService>>,
) -> Result<HttpResponse, AppError> {
    let products = catalog.all_products().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "products": products })))
}

/// Search products by tag list
/// POST /products/searchByTags
///
/// The legacy contract answers a missing or non-array body with 404,
/// not 400.
pub async fn search_by_tags(
    catalog: web::Data<Arc<CatalogService>>,
    body: Option<web::Json<Value>>,
) -> Result<HttpResponse, AppError> {
    let Some(body) = body else {
        return Err(AppError::not_found("No search terms provided"));
    };
    let Value::Array(values) = body.into_inner() else {
        return Err(AppError::not_found("No search terms provided"));
    };

    // Only string terms can match comma-separated tags
    let terms: Vec<String> = values
        .into_iter()
        .filter_map(|value| match value {
            Value::String(term) => Some(term),
            _ => None,
        })
        .collect();

    let products = catalog.search_by_tags(&terms).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "products": products })))
}

/// Create a product and its paired inventory record
/// POST /product/addProduct
pub async fn add_product(
    catalog: web::Data<Arc<CatalogService>>,
    request: Option<web::Json<NewProductRequest>>,
) -> Result<HttpResponse, AppError> {
    let Some(request) = request else {
        return Err(AppError::validation("No product details provided"));
    };

    let product = catalog.add_product(request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "statusMessage": format!(
            "Created product {} with ID {} successfully",
            product.name, product.id
        ),
    })))
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/product")
            .route("/addProduct", web::post().to(add_product))
            .route("/{productId}", web::get().to(get_product)),
    )
    .service(
        web::scope("/products")
            .route("/allProducts", web::get().to(get_all_products))
            .route("/searchByTags", web::post().to(search_by_tags)),
    );
}
