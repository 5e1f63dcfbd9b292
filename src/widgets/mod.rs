//! UI widgets for embedding applications
//!
//! Reusable components built on the debounce core, rendered with ratatui.

pub mod debounced_input;
