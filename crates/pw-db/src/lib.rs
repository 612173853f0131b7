pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use store::{Store, StoreError, StoreTables};
