//! Core types for localcart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;

pub use id::ItemId;
pub use price::Price;
