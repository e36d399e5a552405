use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::core::Result;
use crate::storage::{DataFile, JsonFileStore};

/// Repository for the append-only order sink
///
/// Orders carry whatever fields the caller submitted; only the generated
/// id is the service's own.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Append an order, assigning `order_<n>` from the current count
    async fn append(&self, order: Map<String, Value>) -> Result<String>;
}

/// Flat-file implementation over orders.json
pub struct JsonOrderRepository {
    store: Arc<JsonFileStore>,
}

impl JsonOrderRepository {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderRepository for JsonOrderRepository {
    async fn append(&self, order: Map<String, Value>) -> Result<String> {
        self.store
            .mutate(DataFile::Orders, move |orders: &mut Vec<Value>| {
                let order_id = format!("order_{}", orders.len() + 1);

                let mut record = order;
                record.insert("id".to_string(), Value::String(order_id.clone()));
                orders.push(Value::Object(record));

                Ok(order_id)
            })
            .await
    }
}
