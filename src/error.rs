//! Error types for the Datastore File Operator

use thiserror::Error;

/// Result type alias using the operator's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Operator error types
#[derive(Error, Debug)]
pub enum Error {
    /// A required attribute is missing from the declared configuration
    #[error("Validation error: {0}")]
    Validation(String),

    /// Named datacenter could not be resolved in the remote inventory
    #[error("Datacenter not found: {0}")]
    DatacenterNotFound(String),

    /// Named datastore could not be resolved within the datacenter
    #[error("Datastore not found: {0}")]
    DatastoreNotFound(String),

    /// Datacenter has no default datastore configured
    #[error("No default datastore configured in datacenter '{0}'")]
    NoDefaultDatastore(String),

    /// Upload to the remote datastore failed
    #[error("Upload error: {0}")]
    Upload(String),

    /// Stat of a remote path failed (object absent or inaccessible)
    #[error("Stat error: {0}")]
    Stat(String),

    /// An accepted remote task terminated with an error
    #[error("Task error: {0}")]
    Task(String),

    /// Remote operation failed before a task was accepted
    #[error("Remote error: {0}")]
    Remote(String),

    /// The lifecycle call was cancelled with a remote call in flight
    #[error("Operation cancelled")]
    Cancelled,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create an upload error
    pub fn upload(msg: impl Into<String>) -> Self {
        Error::Upload(msg.into())
    }

    /// Create a stat error
    pub fn stat(msg: impl Into<String>) -> Self {
        Error::Stat(msg.into())
    }

    /// Create a task error
    pub fn task(msg: impl Into<String>) -> Self {
        Error::Task(msg.into())
    }

    /// Create a remote operation error
    pub fn remote(msg: impl Into<String>) -> Self {
        Error::Remote(msg.into())
    }
}
