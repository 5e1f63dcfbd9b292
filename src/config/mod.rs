//! Configuration module
//!
//! File-backed settings for the helpers: debounce timing and input
//! widget defaults.

pub mod config;
