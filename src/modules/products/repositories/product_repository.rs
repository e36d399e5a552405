use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{AppError, Result};
use crate::modules::products::models::{NewProduct, Product};
use crate::storage::{next_record_id, DataFile, JsonFileStore};

/// Repository for product records
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Load the full catalog
    async fn list(&self) -> Result<Vec<Product>>;

    /// Linear scan by numeric id
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;

    /// Append a new product, assigning the next id
    ///
    /// Fails with `Conflict` when a product with the same name already
    /// exists. The check and the append run under the product file's
    /// write lock, so the uniqueness cannot race with another insert.
    async fn insert(&self, new_product: NewProduct) -> Result<Product>;
}

/// Flat-file implementation over product.json
pub struct JsonProductRepository {
    store: Arc<JsonFileStore>,
}

impl JsonProductRepository {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductRepository for JsonProductRepository {
    async fn list(&self) -> Result<Vec<Product>> {
        self.store.load(DataFile::Products).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let products: Vec<Product> = self.store.load(DataFile::Products).await?;

        Ok(products.into_iter().find(|product| product.id == id))
    }

    async fn insert(&self, new_product: NewProduct) -> Result<Product> {
        self.store
            .mutate(DataFile::Products, move |products: &mut Vec<Product>| {
                if products.iter().any(|product| product.name == new_product.name) {
                    return Err(AppError::conflict(
                        "Product already exists. Try updating the inventory",
                    ));
                }

                let product = Product {
                    id: next_record_id(products.iter().map(|product| product.id)),
                    name: new_product.name,
                    price: new_product.price,
                    vat_tax: new_product.vat_tax,
                    vat_tax_percentage: new_product.vat_tax_percentage,
                    tags: new_product.tags,
                };
                products.push(product.clone());

                Ok(product)
            })
            .await
    }
}
