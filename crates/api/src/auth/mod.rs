//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation, validation, and refresh-token helpers.
//! - [`cookie`] -- the `admin_session` cookie used by browser navigation.

pub mod cookie;
pub mod jwt;
pub mod password;
