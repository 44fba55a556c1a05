//! # Database module — PostgreSQL connection pool management
//!
//! The shared PostgreSQL connection pool used by every server function in
//! the `api` crate. Entirely gated behind `#[cfg(feature = "server")]` so
//! that client (WASM) builds never pull in SQLx or Tokio networking code.
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] loads
//! [`crate::settings::Settings`] (defaults → `config.toml` → environment),
//! opens a pool of up to 5 connections, and caches it for all subsequent
//! callers.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
