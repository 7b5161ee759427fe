//! Declared attribute schemas for managed resources
//!
//! The host engine consumes these tables to drive its declarative model:
//! which attributes must be set, and which ones force replacement of the
//! remote object instead of an in-place update.

mod file;

pub use file::*;

use std::collections::BTreeMap;

use serde::Serialize;

/// Schema for a single declared attribute
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct AttributeSchema {
    /// Attribute must be present in the declared configuration
    pub required: bool,

    /// Changing the attribute forces replacement instead of in-place update
    pub force_new: bool,
}

/// Full attribute schema of a resource, keyed by attribute name
pub type ResourceSchema = BTreeMap<&'static str, AttributeSchema>;
