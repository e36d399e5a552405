use serde::{Deserialize, Serialize};

/// A stock record paired with a product at creation time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: i64,
    pub product_id: i64,
    pub stock: i64,
}
