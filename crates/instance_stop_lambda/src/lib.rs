//! AWS-oriented adapters and the Lambda handler for stopping an instance.
//!
//! This crate owns runtime integration details (the Lambda handler and the
//! EC2 adapter) and re-exports the core crate as its runtime module boundary.

pub mod adapters;
pub mod handlers;
pub use instance_stop_core as runtime;
