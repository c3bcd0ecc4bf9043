//! Service layer: orchestration that spans domain logic and persistence.

pub mod badges;
