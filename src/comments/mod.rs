//! Comment CRUD endpoints, all gated by the auth guard.

pub mod handlers;
