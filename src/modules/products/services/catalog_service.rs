use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::inventory::repositories::InventoryRepository;
use crate::modules::products::models::{NewProductRequest, Product, ProductView};
use crate::modules::products::repositories::ProductRepository;
use crate::modules::products::services::TaxCalculator;

/// Service for catalog business logic
///
/// Every operation re-reads the backing files; there is no cross-request
/// caching.
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
    inventory: Arc<dyn InventoryRepository>,
    taxes: TaxCalculator,
}

impl CatalogService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        inventory: Arc<dyn InventoryRepository>,
    ) -> Self {
        Self {
            products,
            inventory,
            taxes: TaxCalculator::new(),
        }
    }

    /// Look up one product by id, joining its inventory stock
    ///
    /// A stock of zero is reported as zero, not omitted; only a missing
    /// inventory record leaves the field absent.
    pub async fn product_by_id(&self, id: i64) -> Result<ProductView> {
        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No product with id {id}")))?;

        let stock = self.inventory.stock_for(id).await?;

        Ok(self.present(product, stock))
    }

    /// The whole catalog, tax-calculated, without stock joins
    pub async fn all_products(&self) -> Result<Vec<ProductView>> {
        let products = self.products.list().await?;
        if products.is_empty() {
            return Err(AppError::not_found("No products provided"));
        }

        Ok(products
            .into_iter()
            .map(|product| self.present(product, None))
            .collect())
    }

    /// Products whose tag list contains any of the requested terms
    ///
    /// Products without tags never match. May legitimately return an
    /// empty list.
    pub async fn search_by_tags(&self, terms: &[String]) -> Result<Vec<ProductView>> {
        let products = self.products.list().await?;

        Ok(products
            .into_iter()
            .filter(|product| product.matches_any_tag(terms))
            .map(|product| self.present(product, None))
            .collect())
    }

    /// Create a product and its paired inventory record
    ///
    /// The two writes are not transactional: a failure after the product
    /// append leaves the inventory without the pair.
    pub async fn add_product(&self, request: NewProductRequest) -> Result<Product> {
        let (new_product, stock) = request.into_parts();
        let product = self.products.insert(new_product).await?;
        self.inventory.insert(product.id, stock).await?;

        tracing::debug!(product_id = product.id, stock, "Created product {}", product.name);

        Ok(product)
    }

    fn present(&self, product: Product, stock: Option<i64>) -> ProductView {
        let breakdown =
            self.taxes
                .display_price(product.price, product.vat_tax, product.vat_tax_percentage);

        ProductView {
            id: product.id,
            name: product.name,
            vat_tax: product.vat_tax,
            vat_tax_percentage: product.vat_tax_percentage,
            price_without_tax: breakdown.price_without_tax,
            actual_price: breakdown.actual_price,
            tax_amount: breakdown.tax_amount,
            stock,
        }
    }
}
