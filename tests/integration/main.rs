//! Integration tests
//!
//! Router tests run without external services. Repository and HTTP tests
//! need PostgreSQL (and a running server for the HTTP ones) and are ignored
//! by default: `cargo test -- --ignored`

mod api;
mod common;
mod repository;
mod router;
