//! Remote datastore client abstraction
//!
//! The capability set this crate consumes from the virtualization
//! platform's management API. Connection establishment, authentication,
//! session handling, and the wire protocol are entirely the concern of the
//! implementation behind [`DatastoreClient`]; the host engine hands the
//! operator an opaque client handle.
//!
//! Move and delete are task-based on the remote side. Waiting for the
//! terminal task outcome is folded into the call itself, so the trait
//! exposes single blocking operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A named top-level organizational unit in the platform inventory
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Datacenter {
    /// Inventory name; empty when resolved as the host default
    pub name: String,
}

/// A named storage volume scoped to a datacenter
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Datastore {
    /// Datastore name
    pub name: String,

    /// Name of the datacenter the datastore belongs to
    pub datacenter: String,
}

impl Datastore {
    /// Datastore-qualified form of a relative path, e.g. `[ds1] vm/disk.vmdk`
    pub fn path(&self, relative: &str) -> String {
        format!("[{}] {}", self.name, relative)
    }
}

/// Metadata returned by a successful stat
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FileInfo {
    /// Datastore-relative path of the file
    pub path: String,

    /// Size in bytes
    pub size: u64,
}

/// Remote management client capability set
#[async_trait]
pub trait DatastoreClient: Send + Sync {
    /// Resolve a datacenter by name. An empty name selects the host default.
    async fn resolve_datacenter(&self, name: &str) -> Result<Datacenter>;

    /// Resolve a datastore by exact name within a datacenter.
    async fn resolve_datastore(&self, datacenter: &Datacenter, name: &str) -> Result<Datastore>;

    /// Resolve the datacenter's configured default datastore.
    async fn default_datastore(&self, datacenter: &Datacenter) -> Result<Datastore>;

    /// Upload a local file to a datastore-relative path.
    async fn upload(
        &self,
        datastore: &Datastore,
        local_path: &str,
        remote_path: &str,
    ) -> Result<()>;

    /// Stat a datastore-relative path.
    async fn stat(&self, datastore: &Datastore, remote_path: &str) -> Result<FileInfo>;

    /// Move a file within the datastore, waiting for the remote task.
    async fn move_file(
        &self,
        datastore: &Datastore,
        old_path: &str,
        new_path: &str,
        overwrite: bool,
    ) -> Result<()>;

    /// Delete a file, waiting for the remote task.
    async fn delete_file(&self, datastore: &Datastore, remote_path: &str) -> Result<()>;
}
