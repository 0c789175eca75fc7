//! Metric helpers for `vsockmon`.
//!
//! This module defines metric names and simple helper functions wrapping the
//! [`metrics`](https://docs.rs/metrics) crate. Without the `metrics` feature
//! the helpers do nothing.

use crate::{symbol::Symbol, wire::EnvelopeType};

/// Name of the counter tracking decoded frames, labelled by envelope type.
pub const FRAMES_DECODED: &str = "vsockmon_frames_decoded_total";
/// Name of the counter tracking frames printed as truncated.
pub const FRAMES_TRUNCATED: &str = "vsockmon_frames_truncated_total";

fn type_label(kind: Symbol<EnvelopeType>) -> &'static str {
    match kind {
        Symbol::Known(EnvelopeType::Generic) => "generic",
        Symbol::Known(EnvelopeType::Virtio) => "virtio",
        Symbol::Unknown(_) => "unknown",
    }
}

/// Record a frame whose envelope type was decoded.
pub fn inc_decoded(kind: Symbol<EnvelopeType>) {
    let label = type_label(kind);
    #[cfg(feature = "metrics")]
    metrics::counter!(FRAMES_DECODED, "type" => label).increment(1);
    #[cfg(not(feature = "metrics"))]
    let _ = label;
}

/// Record a frame that ended in the truncation marker.
pub fn inc_truncated() {
    #[cfg(feature = "metrics")]
    metrics::counter!(FRAMES_TRUNCATED).increment(1);
}
