//! UI components built with Leptos.
//!
//! - [`terminal`] - Terminal emulator interface

pub mod terminal;
