//! Data sources for the catalog.

pub mod config;
