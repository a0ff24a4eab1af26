//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- an admin account holding a valid access token.
//! - [`rbac::RequireAdmin`] -- an [`auth::AuthUser`] whose email is on the allow-list.

pub mod auth;
pub mod rbac;
