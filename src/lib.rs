//! Biblioteca API Library
//!
//! REST API for books, authors and categories backed by PostgreSQL, with a
//! mock JWT login that separates system users from read-only clients.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
