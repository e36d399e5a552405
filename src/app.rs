//! Application state and route wiring shared by the binary and the test
//! servers.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::middleware::json_error_handler;
use crate::modules::inventory::repositories::{InventoryRepository, JsonInventoryRepository};
use crate::modules::notifications::EmailNotifier;
use crate::modules::orders::repositories::{
    CartRepository, JsonCartRepository, JsonOrderRepository, OrderRepository,
};
use crate::modules::payments::PaymentProcessor;
use crate::modules::products::repositories::{JsonProductRepository, ProductRepository};
use crate::modules::products::CatalogService;
use crate::modules::{notifications, orders, payments, products};
use crate::storage::JsonFileStore;

/// Shared service graph built over one file store
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub orders: Arc<dyn OrderRepository>,
    pub cart: Arc<dyn CartRepository>,
    pub payments: Arc<PaymentProcessor>,
    pub notifier: Arc<EmailNotifier>,
}

impl AppState {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        let product_repo: Arc<dyn ProductRepository> =
            Arc::new(JsonProductRepository::new(store.clone()));
        let inventory_repo: Arc<dyn InventoryRepository> =
            Arc::new(JsonInventoryRepository::new(store.clone()));
        let order_repo: Arc<dyn OrderRepository> = Arc::new(JsonOrderRepository::new(store.clone()));
        let cart_repo: Arc<dyn CartRepository> = Arc::new(JsonCartRepository::new(store));

        Self {
            catalog: Arc::new(CatalogService::new(product_repo, inventory_repo)),
            orders: order_repo,
            cart: cart_repo,
            payments: Arc::new(PaymentProcessor::new()),
            notifier: Arc::new(EmailNotifier::new()),
        }
    }
}

/// Register shared state and every module's routes
pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(web::Data::new(state.catalog.clone()))
        .app_data(web::Data::new(state.orders.clone()))
        .app_data(web::Data::new(state.cart.clone()))
        .app_data(web::Data::new(state.payments.clone()))
        .app_data(web::Data::new(state.notifier.clone()))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler));

    products::controllers::configure(cfg);
    orders::controllers::configure(cfg);
    payments::controllers::configure(cfg);
    notifications::controllers::configure(cfg);

    cfg.route("/health", web::get().to(health_check))
        .route("/", web::get().to(index));
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "storefront"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Storefront Mock Commerce Backend",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}
