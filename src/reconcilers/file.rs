//! Datastore file reconciler
//!
//! Handles the business logic for the file resource:
//! - Attribute validation
//! - Datacenter and datastore resolution
//! - Upload, stat, rename, and delete of the remote file
//!
//! Each handler issues a strictly sequential chain of remote calls and
//! races every call against a per-invocation cancellation scope. Remote
//! failures are surfaced verbatim; no retries happen at this layer.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::client::{Datacenter, Datastore, DatastoreClient};
use crate::error::{Error, Result};
use crate::metrics;
use crate::resource::{Context, ResourceState};
use crate::schema::{
    FileSpec, ATTR_DATACENTER, ATTR_DATASTORE, ATTR_DESTINATION_FILE, ATTR_SOURCE_FILE,
};

/// Extract and validate the file descriptor from declared state
///
/// `datacenter` defaults to empty, meaning the client resolves the host
/// default. The other attributes must be present and non-empty; validation
/// fails before any remote call is attempted.
pub fn validate(state: &ResourceState) -> Result<FileSpec> {
    let datacenter = state
        .get_str(ATTR_DATACENTER)
        .unwrap_or_default()
        .to_string();

    let datastore = require(state, ATTR_DATASTORE)?;
    let source_file = require(state, ATTR_SOURCE_FILE)?;
    let destination_file = require(state, ATTR_DESTINATION_FILE)?;

    Ok(FileSpec {
        datacenter,
        datastore,
        source_file,
        destination_file,
    })
}

/// Require a non-empty string attribute
fn require(state: &ResourceState, key: &str) -> Result<String> {
    match state.get_str(key) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(Error::validation(format!("{} argument is required", key))),
    }
}

/// Create the remote file by uploading the local source
///
/// On success the identity key is recorded and observed state is refreshed
/// through an immediate read. On any failure no state is recorded.
pub async fn create(state: &mut ResourceState, ctx: &Context) -> Result<()> {
    let spec = validate(state)?;
    let cancel = ctx.cancel.child_token();

    info!(
        datastore = %spec.datastore,
        destination = %spec.destination_file,
        "Creating datastore file"
    );

    let datastore = resolve_target(&spec, ctx, &cancel).await?;
    with_cancel(
        &cancel,
        ctx.client
            .upload(&datastore, &spec.source_file, &spec.destination_file),
    )
    .await?;

    state.set_id(spec.id());
    info!(id = %spec.id(), "Created datastore file");

    // Confirm presence and refresh observed state
    read(state, ctx).await
}

/// Refresh observed state by statting the remote file
///
/// A failed stat clears the identity key so the host engine treats the
/// resource as gone and recreates it on the next apply. Resolution
/// failures propagate without touching the key.
pub async fn read(state: &mut ResourceState, ctx: &Context) -> Result<()> {
    let spec = validate(state)?;
    let cancel = ctx.cancel.child_token();

    let datastore = resolve_target(&spec, ctx, &cancel).await?;

    match with_cancel(&cancel, ctx.client.stat(&datastore, &spec.destination_file)).await {
        Ok(found) => {
            info!(
                destination = %spec.destination_file,
                size = found.size,
                "Read datastore file"
            );
            Ok(())
        }
        Err(e) => {
            warn!(
                destination = %spec.destination_file,
                error = %e,
                "Remote file missing, marking resource for recreation"
            );
            metrics::DRIFT_DETECTED
                .with_label_values(&[&datastore.name])
                .inc();
            state.clear_id();
            Err(e)
        }
    }
}

/// Rename the remote file when the destination path changed
///
/// `destination_file` is the only updatable attribute. The identity key is
/// not refreshed here; the read that follows reconciles it.
pub async fn update(state: &mut ResourceState, ctx: &Context) -> Result<()> {
    let spec = validate(state)?;

    if !state.has_change(ATTR_DESTINATION_FILE) {
        return Ok(());
    }

    let old_destination = state
        .previous_str(ATTR_DESTINATION_FILE)
        .unwrap_or_default()
        .to_string();
    let cancel = ctx.cancel.child_token();

    let datastore = resolve_target(&spec, ctx, &cancel).await?;
    info!(
        from = %datastore.path(&old_destination),
        to = %datastore.path(&spec.destination_file),
        "Renaming datastore file"
    );
    with_cancel(
        &cancel,
        ctx.client
            .move_file(&datastore, &old_destination, &spec.destination_file, true),
    )
    .await?;

    Ok(())
}

/// Remove the remote file
///
/// Only the remote copy is removed; the local source is never touched. The
/// identity key is cleared only once the delete task succeeds.
pub async fn delete(state: &mut ResourceState, ctx: &Context) -> Result<()> {
    let spec = validate(state)?;
    let cancel = ctx.cancel.child_token();

    let datastore = resolve_target(&spec, ctx, &cancel).await?;
    info!(
        path = %datastore.path(&spec.destination_file),
        "Deleting datastore file"
    );
    with_cancel(
        &cancel,
        ctx.client.delete_file(&datastore, &spec.destination_file),
    )
    .await?;

    state.clear_id();
    Ok(())
}

/// Resolve a datastore by name, or the datacenter default when unnamed
pub async fn get_datastore(
    client: &dyn DatastoreClient,
    datacenter: &Datacenter,
    name: &str,
) -> Result<Datastore> {
    if name.is_empty() {
        client.default_datastore(datacenter).await
    } else {
        client.resolve_datastore(datacenter, name).await
    }
}

/// Resolve the datacenter and datastore a descriptor addresses
async fn resolve_target(
    spec: &FileSpec,
    ctx: &Context,
    cancel: &CancellationToken,
) -> Result<Datastore> {
    let datacenter = with_cancel(cancel, ctx.client.resolve_datacenter(&spec.datacenter)).await?;
    with_cancel(
        cancel,
        get_datastore(ctx.client.as_ref(), &datacenter, &spec.datastore),
    )
    .await
}

/// Race a remote call against the invocation's cancellation scope
///
/// Biased toward cancellation so an already-cancelled scope never issues
/// the call. An aborted in-flight call is not rolled back.
async fn with_cancel<T>(
    cancel: &CancellationToken,
    op: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        result = op => result,
    }
}
