// Product records as persisted in product.json, plus the request and
// response shapes for the catalog endpoints.
//
// Stored records keep the base `price`; callers only ever see the
// tax-calculated view (priceWithoutTax / actualPrice / taxAmount) with
// the internal `tags` field stripped.

use rust_decimal::Decimal;
use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A product record as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub vat_tax: bool,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub vat_tax_percentage: Decimal,
    /// Comma-separated tag list; absent means the product never matches
    /// a tag search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl Product {
    /// Whether any of this product's tags, trimmed, equals one of the
    /// requested terms
    pub fn matches_any_tag(&self, terms: &[String]) -> bool {
        let Some(tags) = self.tags.as_deref() else {
            return false;
        };

        tags.split(',')
            .map(str::trim)
            .any(|tag| terms.iter().any(|term| term == tag))
    }
}

/// Fields of a product to be created, without its inventory stock
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub vat_tax: bool,
    pub vat_tax_percentage: Decimal,
    pub tags: Option<String>,
}

/// Request body for POST /product/addProduct
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductRequest {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub vat_tax: bool,
    /// Accepted as a JSON number or a numeric string, like the legacy
    /// service's parseFloat coercion
    #[serde(default, deserialize_with = "deserialize_percentage")]
    pub vat_tax_percentage: Decimal,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub stock: i64,
}

impl NewProductRequest {
    /// Split into the record to persist and the stock for the paired
    /// inventory entry
    pub fn into_parts(self) -> (NewProduct, i64) {
        let stock = self.stock;
        let product = NewProduct {
            name: self.name,
            price: self.price,
            vat_tax: self.vat_tax,
            vat_tax_percentage: self.vat_tax_percentage,
            tags: self.tags,
        };

        (product, stock)
    }
}

/// A product as returned to callers: tax breakdown applied, tags
/// stripped, stock joined where an inventory record exists
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub vat_tax: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub vat_tax_percentage: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_without_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub actual_price: Decimal,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub tax_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

fn deserialize_percentage<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(number) => {
            let text = number.to_string();
            Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text))
        }
        serde_json::Value::String(text) => {
            let trimmed = text.trim();
            Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed))
        }
        _ => {
            return Err(D::Error::custom(
                "vatTaxPercentage must be a number or numeric string",
            ))
        }
    };

    parsed.map_err(|_| D::Error::custom(format!("invalid vatTaxPercentage: {value}")))
}
