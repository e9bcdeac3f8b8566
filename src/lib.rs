//! A small PostgreSQL-backed client directory.
//!
//! Stores clients (name and unique email) together with any number of phone
//! numbers per client, and exposes schema initialization plus the CRUD
//! operations the directory needs: add, change, delete, and search.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
