//! # Bridge Metrics
//!
//! Prometheus counters for transfer transitions and rejected operations.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! bridge-htlc = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `bridge_transfers_initiated_total` - Counter of created transfers
//! - `bridge_transfers_completed_total` - Counter of completed transfers
//! - `bridge_transfers_refunded_total` - Counter of refunded transfers
//! - `bridge_operations_rejected_total` - Counter of rejected operations (by kind)

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total transfers initiated
    pub static ref TRANSFERS_INITIATED: IntCounter = register_int_counter!(
        "bridge_transfers_initiated_total",
        "Total number of bridge transfers initiated"
    )
    .expect("Failed to create TRANSFERS_INITIATED metric");

    /// Total transfers completed
    pub static ref TRANSFERS_COMPLETED: IntCounter = register_int_counter!(
        "bridge_transfers_completed_total",
        "Total number of bridge transfers completed"
    )
    .expect("Failed to create TRANSFERS_COMPLETED metric");

    /// Total transfers refunded
    pub static ref TRANSFERS_REFUNDED: IntCounter = register_int_counter!(
        "bridge_transfers_refunded_total",
        "Total number of bridge transfers refunded"
    )
    .expect("Failed to create TRANSFERS_REFUNDED metric");

    /// Total rejected operations, labeled by error kind
    pub static ref OPERATIONS_REJECTED: IntCounterVec = register_int_counter_vec!(
        "bridge_operations_rejected_total",
        "Total number of rejected bridge operations",
        &["kind"]
    )
    .expect("Failed to create OPERATIONS_REJECTED metric");
}

/// Record a created transfer.
#[inline]
pub fn record_initiated() {
    #[cfg(feature = "metrics")]
    TRANSFERS_INITIATED.inc();
}

/// Record a completed transfer.
#[inline]
pub fn record_completed() {
    #[cfg(feature = "metrics")]
    TRANSFERS_COMPLETED.inc();
}

/// Record a refunded transfer.
#[inline]
pub fn record_refunded() {
    #[cfg(feature = "metrics")]
    TRANSFERS_REFUNDED.inc();
}

/// Record a rejected operation.
#[inline]
pub fn record_rejected(kind: &str) {
    #[cfg(feature = "metrics")]
    OPERATIONS_REJECTED.with_label_values(&[kind]).inc();

    #[cfg(not(feature = "metrics"))]
    let _ = kind;
}
