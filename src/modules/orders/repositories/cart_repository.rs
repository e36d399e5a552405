use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::Result;
use crate::storage::{DataFile, JsonFileStore};

/// Repository for the append-only cart collection
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Append the submitted items, returning the new cart size
    async fn append_items(&self, items: Vec<Value>) -> Result<usize>;
}

/// Flat-file implementation over cart.json
pub struct JsonCartRepository {
    store: Arc<JsonFileStore>,
}

impl JsonCartRepository {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartRepository for JsonCartRepository {
    async fn append_items(&self, items: Vec<Value>) -> Result<usize> {
        self.store
            .mutate(DataFile::Cart, move |cart: &mut Vec<Value>| {
                cart.extend(items);

                Ok(cart.len())
            })
            .await
    }
}
