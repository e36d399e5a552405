use std::sync::Arc;

use async_trait::async_trait;

use crate::core::Result;
use crate::modules::inventory::models::InventoryItem;
use crate::storage::{next_record_id, DataFile, JsonFileStore};

/// Repository for the append-only inventory ledger
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Stock for a product, if a ledger entry exists
    ///
    /// Zero is a real stock level, not a missing entry.
    async fn stock_for(&self, product_id: i64) -> Result<Option<i64>>;

    /// Append a stock record for a product, assigning the next id
    async fn insert(&self, product_id: i64, stock: i64) -> Result<InventoryItem>;
}

/// Flat-file implementation over inventory.json
pub struct JsonInventoryRepository {
    store: Arc<JsonFileStore>,
}

impl JsonInventoryRepository {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl InventoryRepository for JsonInventoryRepository {
    async fn stock_for(&self, product_id: i64) -> Result<Option<i64>> {
        let items: Vec<InventoryItem> = self.store.load(DataFile::Inventory).await?;

        Ok(items
            .into_iter()
            .find(|item| item.product_id == product_id)
            .map(|item| item.stock))
    }

    async fn insert(&self, product_id: i64, stock: i64) -> Result<InventoryItem> {
        self.store
            .mutate(DataFile::Inventory, move |items: &mut Vec<InventoryItem>| {
                let item = InventoryItem {
                    id: next_record_id(items.iter().map(|item| item.id)),
                    product_id,
                    stock,
                };
                items.push(item.clone());

                Ok(item)
            })
            .await
    }
}
