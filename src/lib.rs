//! Datastore File Operator
//!
//! Manages the lifecycle of individual files inside a virtualization
//! platform's datastore through a declarative Create/Read/Update/Delete
//! contract: uploading a local file to a remote path, verifying its
//! presence, renaming it, and deleting it. The host reconciliation engine
//! and the remote management client are external collaborators.

pub mod client;
pub mod error;
pub mod metrics;
pub mod reconcilers;
pub mod resource;
pub mod schema;

pub use error::{Error, Result};
