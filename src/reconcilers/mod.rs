//! Reconciliation handlers for managed resources
//!
//! This module contains the business logic invoked by the lifecycle
//! contract. Handlers are responsible for:
//! - Validating declared attributes
//! - Resolving remote inventory objects
//! - Performing the single remote operation each lifecycle verb maps to
//! - Maintaining the persisted identity key

pub mod file;
