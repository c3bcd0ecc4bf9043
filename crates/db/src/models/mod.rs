//! Domain model structs and DTOs.
//!
//! Each submodule pairs `FromRow` + `Serialize` entity structs (where the
//! row carries a payload) with `Deserialize` DTOs for the operations the
//! API accepts.

pub mod activity;
pub mod badge;
pub mod user;
