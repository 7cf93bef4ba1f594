//! Persistence layer for the comment board.
//!
//! Exposes the entity models and the `Store` trait with its Postgres
//! implementation.

pub mod models;
pub mod store;

pub use models::{Comment, User};
pub use store::{PgStore, Store};
