//! Localcart Widget library.
//!
//! Session-flag tracking and a shopping-cart widget over a persistent
//! key-value store. There is no server behind this crate: "login" writes
//! flags into storage, the cart mirrors an in-memory line-item list to
//! storage after every mutation, and a host-provided view renders the
//! computed display values.
//!
//! # Modules
//!
//! - [`storage`] - The injected key-value store interface and backends
//! - [`session`] - Login flag and user profile record
//! - [`cart`] - Line items, derived totals, persist-then-rerender mutations
//! - [`actions`] - Explicit cart action dispatch keyed by item identifier
//! - [`view`] - Display values handed to the host presentation layer

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
pub mod cart;
pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod view;
