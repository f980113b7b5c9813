//! HTTP handlers

pub mod catalog;
pub mod health;
pub mod products;
pub mod users;

pub use health::health;
