//! Storage layer
//!
//! Two separate SQLite databases with no shared schema: a relational
//! `users` table and a schema-less `products` document collection, plus an
//! immutable seed catalog held in memory.

pub mod products;
pub mod seed;
pub mod users;

pub use products::ProductStore;
pub use seed::{SeedCatalog, SeedProduct};
pub use users::UserStore;
