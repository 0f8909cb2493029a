//! Core types and trait definitions for Launchpad.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! remote client and the SQLite cache plug in through the [`store`] traits and
//! are composed by [`repository::Repository`].

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod dto;
pub mod error;
pub mod launch;
pub mod mapper;
pub mod repository;
pub mod status;
pub mod store;

pub use error::{Error, Result};
pub use launch::{LaunchKind, LaunchOutcome, LaunchRecord};
pub use repository::Repository;
pub use status::UiStatus;
