//! Prometheus metrics definitions

use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, HistogramVec,
};

lazy_static::lazy_static! {
    /// Total number of lifecycle operations by outcome
    pub static ref LIFECYCLE_OPERATIONS: CounterVec = register_counter_vec!(
        "datastore_file_lifecycle_operations_total",
        "Total number of lifecycle operations by outcome",
        &["operation", "outcome"]
    ).unwrap();

    /// Lifecycle operation duration histogram
    pub static ref LIFECYCLE_DURATION: HistogramVec = register_histogram_vec!(
        "datastore_file_lifecycle_duration_seconds",
        "Duration of lifecycle operations in seconds",
        &["operation"],
        vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]
    ).unwrap();

    /// Times a read found the remote file missing
    pub static ref DRIFT_DETECTED: CounterVec = register_counter_vec!(
        "datastore_file_drift_detected_total",
        "Times a read found the remote file missing",
        &["datastore"]
    ).unwrap();
}

/// Record the outcome of a lifecycle operation
pub fn record_outcome<T>(operation: &str, result: &crate::error::Result<T>) {
    let outcome = if result.is_ok() { "success" } else { "failure" };
    LIFECYCLE_OPERATIONS
        .with_label_values(&[operation, outcome])
        .inc();
}
