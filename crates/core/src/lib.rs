//! Domain logic for the Alterino Game Dev recruitment service.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` crate
//! persists what is defined here and the `api` crate exposes it over HTTP.

pub mod application;
pub mod error;
pub mod export;
pub mod filter;
pub mod types;
