//! Products catalog module.
//!
//! This crate contains the product record and the in-memory catalog store,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod product;
pub mod store;

pub use product::Product;
pub use store::{Catalog, InMemoryCatalog, SEARCH_RESULT_CAP};
