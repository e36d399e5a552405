// Products module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{NewProduct, NewProductRequest, Product, ProductView};
pub use repositories::{JsonProductRepository, ProductRepository};
pub use services::{CatalogService, TaxCalculator};
