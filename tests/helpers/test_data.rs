// Sample records for seeding test catalogs

use serde_json::{json, Value};

/// VAT-taxed product tagged "electronics, mobile"
pub fn phone() -> Value {
    json!({
        "id": 1,
        "name": "Phone",
        "price": 100.0,
        "vatTax": true,
        "vatTaxPercentage": 10.0,
        "tags": "electronics, mobile"
    })
}

/// Untaxed product tagged "furniture"
pub fn desk() -> Value {
    json!({
        "id": 2,
        "name": "Desk",
        "price": 250.0,
        "vatTax": false,
        "vatTaxPercentage": 0.0,
        "tags": "furniture"
    })
}

/// Product with no tags field at all
pub fn mystery_box() -> Value {
    json!({
        "id": 3,
        "name": "Mystery Box",
        "price": 15.0,
        "vatTax": false,
        "vatTaxPercentage": 0.0
    })
}

/// Creation payload with a string vatTaxPercentage, like the legacy
/// clients sent
pub fn widget_payload() -> Value {
    json!({
        "name": "Widget",
        "price": 100,
        "vatTax": true,
        "vatTaxPercentage": "10",
        "stock": 5
    })
}
