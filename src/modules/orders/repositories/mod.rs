pub mod cart_repository;
pub mod order_repository;

pub use cart_repository::{CartRepository, JsonCartRepository};
pub use order_repository::{JsonOrderRepository, OrderRepository};
