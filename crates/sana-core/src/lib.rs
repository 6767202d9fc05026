//! sana-core
//!
//! Pure domain types for the Sana clinic platform and session-token
//! generation. No I/O — this is the shared vocabulary of the system.

pub mod error;
pub mod models;
pub mod token;
