//! sana-storage
//!
//! Storage collaborator boundary: transaction traits the workflows run
//! against, and an in-memory implementation with serializable semantics
//! that doubles as the reference for what a SQL-backed store must provide.

pub mod error;
pub mod memory;
pub mod store;
