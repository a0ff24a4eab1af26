//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod admin_user_repo;
pub mod application_repo;
pub mod session_repo;

pub use admin_user_repo::AdminUserRepo;
pub use application_repo::ApplicationRepo;
pub use session_repo::SessionRepo;
