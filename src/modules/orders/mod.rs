// Orders module

pub mod controllers;
pub mod repositories;

pub use repositories::{
    CartRepository, JsonCartRepository, JsonOrderRepository, OrderRepository,
};
