//! sana-reporting
//!
//! Clinical summary composition. The reporting layer assembles a
//! [`bundle::SummaryBundle`] from persisted aggregates; the composer
//! renders it to deterministic narrative text. No retrieval, no
//! persistence.

pub mod bundle;
pub mod summary;
