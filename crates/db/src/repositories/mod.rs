//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod badge_repo;
pub mod user_repo;

pub use activity_repo::ActivityRepo;
pub use badge_repo::BadgeRepo;
pub use user_repo::UserRepo;
