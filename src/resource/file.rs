//! Datastore file resource
//!
//! Wires the lifecycle contract to the file reconciler and records
//! per-operation metrics.

use async_trait::async_trait;
use tracing::instrument;

use crate::error::Result;
use crate::metrics;
use crate::reconcilers::file as file_reconciler;
use crate::resource::{Context, Resource, ResourceState};
use crate::schema::{file_schema, ResourceSchema};

/// A single file inside a datastore, managed declaratively
#[derive(Clone, Copy, Debug, Default)]
pub struct FileResource;

impl FileResource {
    /// Create a new file resource
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Resource for FileResource {
    fn schema(&self) -> ResourceSchema {
        file_schema()
    }

    #[instrument(skip_all, fields(operation = "create"))]
    async fn create(&self, state: &mut ResourceState, ctx: &Context) -> Result<()> {
        let _timer = metrics::LIFECYCLE_DURATION
            .with_label_values(&["create"])
            .start_timer();
        let result = file_reconciler::create(state, ctx).await;
        metrics::record_outcome("create", &result);
        result
    }

    #[instrument(skip_all, fields(operation = "read"))]
    async fn read(&self, state: &mut ResourceState, ctx: &Context) -> Result<()> {
        let _timer = metrics::LIFECYCLE_DURATION
            .with_label_values(&["read"])
            .start_timer();
        let result = file_reconciler::read(state, ctx).await;
        metrics::record_outcome("read", &result);
        result
    }

    #[instrument(skip_all, fields(operation = "update"))]
    async fn update(&self, state: &mut ResourceState, ctx: &Context) -> Result<()> {
        let _timer = metrics::LIFECYCLE_DURATION
            .with_label_values(&["update"])
            .start_timer();
        let result = file_reconciler::update(state, ctx).await;
        metrics::record_outcome("update", &result);
        result
    }

    #[instrument(skip_all, fields(operation = "delete"))]
    async fn delete(&self, state: &mut ResourceState, ctx: &Context) -> Result<()> {
        let _timer = metrics::LIFECYCLE_DURATION
            .with_label_values(&["delete"])
            .start_timer();
        let result = file_reconciler::delete(state, ctx).await;
        metrics::record_outcome("delete", &result);
        result
    }
}
