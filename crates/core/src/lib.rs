//! Pure domain logic for the sattva streak and badge system.
//!
//! This crate has no database dependencies. All functions operate on
//! pre-loaded data passed in by the caller; the `db` crate owns loading
//! and the `api` crate owns orchestration.

pub mod badges;
pub mod error;
pub mod streak;
pub mod types;
