pub mod product;

pub use product::{NewProduct, NewProductRequest, Product, ProductView};
