//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Line`], [`LineKind`] - Terminal output line types

mod terminal;

pub use terminal::{Line, LineKind};
