// Inventory module

pub mod models;
pub mod repositories;

pub use models::InventoryItem;
pub use repositories::{InventoryRepository, JsonInventoryRepository};
