//! Core terminal logic, free of browser dependencies.
//!
//! This module provides:
//! - [`Command`] parsing and [`execute`] for the fixed command registry
//! - [`Session`] for the line buffer, history, and input dispatch

mod commands;
mod session;

pub use commands::{Command, CommandResult, execute};
pub use session::Session;
