//! Host-engine plugin contract
//!
//! The declarative engine invokes managed resources through the
//! [`Resource`] trait, threading a mutable [`ResourceState`] handle and a
//! shared [`Context`] (opaque client handle plus cancellation root) through
//! each lifecycle call. No state survives between calls other than what the
//! engine persists in the handle.

mod file;

pub use file::FileResource;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::client::DatastoreClient;
use crate::error::Result;
use crate::schema::ResourceSchema;

/// Shared context passed to every lifecycle call
#[derive(Clone)]
pub struct Context {
    /// Remote datastore client
    pub client: Arc<dyn DatastoreClient>,

    /// Cancellation root; each lifecycle call derives its own scope from it
    pub cancel: CancellationToken,
}

impl Context {
    /// Create a new context
    pub fn new(client: Arc<dyn DatastoreClient>) -> Self {
        Self {
            client,
            cancel: CancellationToken::new(),
        }
    }
}

/// Mutable state handle the host engine threads through lifecycle calls
///
/// Holds the opaque identity key, the currently declared attribute values,
/// and the previously applied values the engine uses for change detection.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ResourceState {
    /// Opaque identity key persisted across reconciliation runs
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    /// Currently declared attribute values
    #[serde(default)]
    attrs: HashMap<String, Value>,

    /// Previously applied attribute values, for change detection
    #[serde(default)]
    previous: HashMap<String, Value>,
}

impl ResourceState {
    /// Create an empty state handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Persisted identity key, if the resource exists remotely
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Record the identity key of the remote object
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Signal to the host engine that the remote object no longer exists
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Set a declared attribute value
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Remove a declared attribute
    pub fn remove_attr(&mut self, key: &str) -> Option<Value> {
        self.attrs.remove(key)
    }

    /// Declared attribute value as a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }

    /// Record a previously applied attribute value
    pub fn set_previous(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.previous.insert(key.into(), value.into());
    }

    /// Previously applied attribute value as a string
    pub fn previous_str(&self, key: &str) -> Option<&str> {
        self.previous.get(key).and_then(Value::as_str)
    }

    /// Whether the declared value differs from the previously applied one
    pub fn has_change(&self, key: &str) -> bool {
        self.previous.get(key) != self.attrs.get(key)
    }

    /// Old/new value pair for an attribute
    pub fn change(&self, key: &str) -> (Option<&str>, Option<&str>) {
        (self.previous_str(key), self.get_str(key))
    }
}

/// Lifecycle contract a managed resource implements for the host engine
///
/// Each handler validates its inputs independently, performs exactly one
/// idempotent remote operation set, and reports failure without recording
/// partial state. The engine decides whether and when to retry.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Declared attribute schema for this resource
    fn schema(&self) -> ResourceSchema;

    /// Create the remote object from declared state
    async fn create(&self, state: &mut ResourceState, ctx: &Context) -> Result<()>;

    /// Refresh observed state; clears the identity key when the remote
    /// object is gone so the engine recreates it on the next apply
    async fn read(&self, state: &mut ResourceState, ctx: &Context) -> Result<()>;

    /// Apply in-place changes to mutable attributes
    async fn update(&self, state: &mut ResourceState, ctx: &Context) -> Result<()>;

    /// Remove the remote object
    async fn delete(&self, state: &mut ResourceState, ctx: &Context) -> Result<()>;
}
