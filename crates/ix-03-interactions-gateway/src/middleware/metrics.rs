//! Request counters for the health endpoint.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Gateway metrics
#[derive(Debug, Default)]
pub struct GatewayMetrics {
    /// Requests that reached the interactions endpoint
    pub requests_total: AtomicU64,
    /// Requests refused by the signature gate
    pub rejected_signatures: AtomicU64,
    /// Requests refused for exceeding the body limit
    pub oversized_bodies: AtomicU64,
    /// PING handshakes answered
    pub pings: AtomicU64,
    /// Commands that produced a reply
    pub commands_dispatched: AtomicU64,
    /// Commands that ended in an error
    pub dispatch_failures: AtomicU64,
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected_signature(&self) {
        self.rejected_signatures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_oversized_body(&self) {
        self.oversized_bodies.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ping(&self) {
        self.pings.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the outcome of one dispatch
    pub fn record_dispatch(&self, success: bool) {
        if success {
            self.commands_dispatched.fetch_add(1, Ordering::Relaxed);
        } else {
            self.dispatch_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Export metrics as JSON
    pub fn to_json(&self) -> Value {
        json!({
            "requests_total": self.requests_total.load(Ordering::Relaxed),
            "rejected_signatures": self.rejected_signatures.load(Ordering::Relaxed),
            "oversized_bodies": self.oversized_bodies.load(Ordering::Relaxed),
            "pings": self.pings.load(Ordering::Relaxed),
            "commands_dispatched": self.commands_dispatched.load(Ordering::Relaxed),
            "dispatch_failures": self.dispatch_failures.load(Ordering::Relaxed),
        })
    }
}
