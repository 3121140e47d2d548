//! Utility modules for DOM access and data structures.
//!
//! Provides:
//! - [`RingBuffer`] - Fixed-capacity circular buffer with O(1) push
//! - [`dom`] - Window, focus, and new-tab helpers
//! - [`validate_redirect_url`] - URL security validation

pub mod dom;
mod ring_buffer;
mod url;

pub use ring_buffer::RingBuffer;
pub use url::{UrlValidation, validate_redirect_url};
