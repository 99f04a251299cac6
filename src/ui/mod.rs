//! Dioxus views over the catalog.

pub mod components;
pub mod pages;
pub mod shell;
pub mod theme;
