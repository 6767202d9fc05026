//! sana-workflows
//!
//! Transactional orchestrations over the storage collaborator: appointment
//! booking with conflict detection, scale submission with alert evaluation,
//! and emotional check-in recording. Each workflow runs as one transaction
//! and rolls back fully on any failure.

pub mod booking;
pub mod checkins;
pub mod conflict;
pub mod error;
pub mod submissions;
