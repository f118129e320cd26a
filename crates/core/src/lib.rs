//! Localcart Core - Shared types library.
//!
//! This crate provides common types used across all localcart components:
//! - `widget` - Session-flag and cart widget logic
//! - `cli` - Command-line harness for driving the widget
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe item IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
