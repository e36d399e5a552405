// Integration tests for the order sink and cart endpoints

use serde_json::{json, Value};
use storefront::storage::DataFile;

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::test_server::spawn_empty;

#[actix_web::test]
async fn test_oms_orders_get_sequential_ids() {
    let harness = spawn_empty().await;

    let mut first = harness
        .srv
        .post("/oms/order")
        .send_json(&json!({ "productId": 1, "quantity": 2 }))
        .await
        .unwrap();
    assert_eq!(first.status().as_u16(), 200);

    let body: Value = first.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["orderId"], json!("order_1"));

    let mut second = harness
        .srv
        .post("/oms/order")
        .send_json(&json!({ "productId": 2 }))
        .await
        .unwrap();
    let body: Value = second.json().await.unwrap();
    assert_eq!(body["orderId"], json!("order_2"));

    // Submitted fields persist alongside the generated id
    let orders = harness.records(DataFile::Orders);
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["id"], json!("order_1"));
    assert_eq!(orders[0]["quantity"], json!(2));
    assert_eq!(orders[1]["id"], json!("order_2"));
}

#[actix_web::test]
async fn test_add_to_cart_appends_items() {
    let harness = spawn_empty().await;

    let mut resp = harness
        .srv
        .post("/order/addToCart")
        .send_json(&json!([
            { "productId": 1, "quantity": 2 },
            { "productId": 3, "quantity": 1 }
        ]))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["statusMessage"], json!("Added 2 item(s) to cart"));

    let cart = harness.records(DataFile::Cart);
    let cart = cart.as_array().unwrap();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart[0]["productId"], json!(1));

    // A second request keeps appending
    harness
        .srv
        .post("/order/addToCart")
        .send_json(&json!([{ "productId": 5 }]))
        .await
        .unwrap();

    let cart = harness.records(DataFile::Cart);
    assert_eq!(cart.as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_add_to_cart_rejects_non_array_body() {
    let harness = spawn_empty().await;

    let mut resp = harness
        .srv
        .post("/order/addToCart")
        .send_json(&json!({ "productId": 1 }))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["statusMessage"], json!("No product(s) details provided"));

    let cart = harness.records(DataFile::Cart);
    assert!(cart.as_array().unwrap().is_empty());
}
