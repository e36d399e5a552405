// Contract tests for the catalog endpoints
//
// Validate the JSON shapes the API promises to callers:
// - product views expose priceWithoutTax/actualPrice, never price or tags
// - taxAmount appears exactly when vatTax is set
// - error envelopes carry a single statusMessage string

use serde_json::json;

#[test]
fn test_add_product_request_schema() {
    let request = json!({
        "name": "Widget",
        "price": 100,
        "vatTax": true,
        "vatTaxPercentage": "10",
        "tags": "tools,hardware",
        "stock": 5
    });

    // Verify required fields
    assert!(request.get("name").is_some(), "name is required");
    assert!(request.get("price").is_some(), "price is required");
    assert!(request.get("stock").is_some(), "stock is required");

    // Verify field types
    assert!(request["name"].is_string(), "name must be string");
    assert!(request["price"].is_number(), "price must be number");
    assert!(
        request["vatTaxPercentage"].is_string() || request["vatTaxPercentage"].is_number(),
        "vatTaxPercentage may be a number or numeric string"
    );
}

#[test]
fn test_product_view_schema_with_vat() {
    let view = json!({
        "id": 1,
        "name": "Phone",
        "vatTax": true,
        "vatTaxPercentage": 10.0,
        "priceWithoutTax": 100.0,
        "actualPrice": 110.0,
        "taxAmount": 10.0,
        "stock": 7
    });

    assert!(view["id"].is_i64(), "id must be integer");
    assert!(view["priceWithoutTax"].is_number(), "priceWithoutTax must be number");
    assert!(view["actualPrice"].is_number(), "actualPrice must be number");
    assert!(view["taxAmount"].is_number(), "taxAmount must be number under VAT");

    // Internal fields never leak into views
    assert!(view.get("price").is_none(), "base price must not leak");
    assert!(view.get("tags").is_none(), "tags must be stripped");
}

#[test]
fn test_product_view_schema_without_vat() {
    let view = json!({
        "id": 2,
        "name": "Desk",
        "vatTax": false,
        "vatTaxPercentage": 0.0,
        "priceWithoutTax": 250.0,
        "actualPrice": 250.0
    });

    assert!(view.get("taxAmount").is_none(), "taxAmount must be absent without VAT");
    assert_eq!(
        view["actualPrice"], view["priceWithoutTax"],
        "untaxed products sell at the base price"
    );
}

#[test]
fn test_error_envelope_schema() {
    let error = json!({
        "statusMessage": "No product with id 42"
    });

    assert!(error["statusMessage"].is_string(), "statusMessage must be string");
    assert_eq!(
        error.as_object().map(|fields| fields.len()),
        Some(1),
        "error envelope carries statusMessage only"
    );
}

#[test]
fn test_payment_response_schemas() {
    let accepted = json!({ "success": true, "transactionId": "txn12345" });
    assert!(accepted["success"].as_bool().unwrap());
    assert!(accepted["transactionId"].is_string());

    let rejected = json!({ "success": false });
    assert!(!rejected["success"].as_bool().unwrap());
    assert!(
        rejected.get("transactionId").is_none(),
        "rejected payments carry no transaction id"
    );
}

#[test]
fn test_order_response_schema() {
    let response = json!({ "success": true, "orderId": "order_1" });

    assert!(response["success"].is_boolean());
    let order_id = response["orderId"].as_str().unwrap();
    assert!(
        order_id.starts_with("order_"),
        "order ids are order_<n>, got {order_id}"
    );
}
