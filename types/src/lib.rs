//! Core domain types for RestReveal.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies:
//! the static content catalog, the validated [`Rating`] scale, and the UI
//! animation primitives shared by the engine and the TUI.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod catalog;
mod rating;
pub mod ui;

pub use catalog::{
    CATEGORY_COUNT, Catalog, Category, CategoryId, Edition, REFLECTION_PROMPT, UnknownEdition,
};
pub use rating::{InvalidRating, Rating};
