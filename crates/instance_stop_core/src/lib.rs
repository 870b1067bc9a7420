//! Shared primitives for the instance stop function.
//!
//! This crate owns configuration resolution and the stop request/response
//! contract. It intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod config;
pub mod contract;
