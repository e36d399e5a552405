pub mod catalog_service;
pub mod tax_calculator;

pub use catalog_service::CatalogService;
pub use tax_calculator::{PriceBreakdown, TaxCalculator};
