//! Row structs and DTOs.
//!
//! Each submodule holds a `FromRow` entity matching a table plus whatever
//! insert DTO its repository accepts.

pub mod admin_user;
pub mod application;
pub mod session;
