//! Prometheus metrics for the Datastore File Operator
//!
//! This module exposes metrics for monitoring lifecycle operations. The
//! crate owns no HTTP surface; gathering and export are the host
//! process's concern.

mod prometheus;

pub use prometheus::*;
