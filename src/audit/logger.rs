//! In-memory audit logger

use crate::config::AuditConfig;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, warn};

use super::sink::{AuditSink, TracingSink};
use super::types::{AuditAction, AuditEvent, AuditEventInput, AuditStats, Severity};

const ID_SUFFIX_LEN: usize = 9;

struct AuditLogInner {
    /// Events in insertion order
    events: VecDeque<AuditEvent>,
    /// Events recorded since creation or the last clear
    total_recorded: u64,
}

/// Append-only, capacity-bounded audit log.
///
/// Construct one per process and pass it by reference to whatever records or
/// queries events. Appends, evictions and queries are serialized behind a
/// mutex, so a shared `&AuditLogger` is safe across threads.
pub struct AuditLogger {
    inner: Mutex<AuditLogInner>,
    config: AuditConfig,
    sink: Arc<dyn AuditSink>,
}

impl AuditLogger {
    /// Create a logger writing operator copies to `tracing`
    pub fn new(config: AuditConfig) -> Self {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Create a logger with a custom operator sink.
    ///
    /// The sink is only used while `config.console_enabled` is set.
    pub fn with_sink(config: AuditConfig, sink: Arc<dyn AuditSink>) -> Self {
        Self {
            inner: Mutex::new(AuditLogInner {
                events: VecDeque::with_capacity(config.max_events.min(1024)),
                total_recorded: 0,
            }),
            config,
            sink,
        }
    }

    /// Logger configuration
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Record an event, evicting the oldest one when over capacity
    pub fn record(&self, input: AuditEventInput) -> AuditEvent {
        let timestamp = Utc::now();
        let event = AuditEvent {
            id: generate_event_id(timestamp),
            timestamp,
            action: input.action,
            actor_id: input.actor_id,
            actor_role: input.actor_role,
            resource: input.resource,
            resource_id: input.resource_id,
            details: input.details,
            severity: input.severity.unwrap_or_default(),
            session_id: input.session_id,
        };

        {
            let mut inner = self.inner.lock();
            inner.events.push_back(event.clone());
            inner.total_recorded += 1;
            while inner.events.len() > self.config.max_events {
                inner.events.pop_front();
            }
        }

        if self.config.console_enabled {
            match panic::catch_unwind(AssertUnwindSafe(|| self.sink.emit(&event))) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    debug!(error = %err, id = %event.id, "Audit sink failed, event retained");
                }
                Err(_) => {
                    warn!(id = %event.id, "Audit sink panicked, event retained");
                }
            }
        }

        event
    }

    /// Record a security event. Severity is always derived from the action;
    /// any severity on `input` is ignored.
    pub fn record_security_event(&self, input: AuditEventInput) -> AuditEvent {
        let severity = input.action.security_severity();
        self.record(AuditEventInput {
            severity: Some(severity),
            ..input
        })
    }

    /// All retained events, oldest first
    pub fn events(&self) -> Vec<AuditEvent> {
        self.inner.lock().events.iter().cloned().collect()
    }

    /// The `limit` most recent events, oldest first
    pub fn recent(&self, limit: usize) -> Vec<AuditEvent> {
        let inner = self.inner.lock();
        let skip = inner.events.len().saturating_sub(limit);
        inner.events.iter().skip(skip).cloned().collect()
    }

    /// Events by actor
    pub fn events_by_user(&self, actor_id: &str) -> Vec<AuditEvent> {
        self.filter(|e| e.actor_id.as_deref() == Some(actor_id))
    }

    /// Events by action kind
    pub fn events_by_action(&self, action: AuditAction) -> Vec<AuditEvent> {
        self.filter(|e| e.action == action)
    }

    /// Events by resource name
    pub fn events_by_resource(&self, resource: &str) -> Vec<AuditEvent> {
        self.filter(|e| e.resource == resource)
    }

    /// Events by severity
    pub fn events_by_severity(&self, severity: Severity) -> Vec<AuditEvent> {
        self.filter(|e| e.severity == severity)
    }

    /// Events captured within `[start, end]`
    pub fn events_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<AuditEvent> {
        self.filter(|e| e.timestamp >= start && e.timestamp <= end)
    }

    /// Warning and error events
    pub fn security_events(&self) -> Vec<AuditEvent> {
        self.filter(|e| e.severity.is_security_relevant())
    }

    /// Number of retained events
    pub fn len(&self) -> usize {
        self.inner.lock().events.len()
    }

    /// Whether no events are retained
    pub fn is_empty(&self) -> bool {
        self.inner.lock().events.is_empty()
    }

    /// Events recorded since creation or the last clear, including evicted ones
    pub fn total_recorded(&self) -> u64 {
        self.inner.lock().total_recorded
    }

    /// Severity counts over the retained events
    pub fn stats(&self) -> AuditStats {
        let inner = self.inner.lock();
        let mut stats = AuditStats {
            retained: inner.events.len(),
            total_recorded: inner.total_recorded,
            ..AuditStats::default()
        };
        for event in &inner.events {
            match event.severity {
                Severity::Info => stats.info += 1,
                Severity::Warning => stats.warning += 1,
                Severity::Error => stats.error += 1,
            }
        }
        stats
    }

    /// Retained events as a pretty-printed JSON array
    pub fn export_json(&self) -> Result<String> {
        let events = self.events();
        Ok(serde_json::to_string_pretty(&events)?)
    }

    /// Drop every event
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.events.clear();
        inner.total_recorded = 0;
    }

    fn filter<F>(&self, predicate: F) -> Vec<AuditEvent>
    where
        F: Fn(&AuditEvent) -> bool,
    {
        self.inner
            .lock()
            .events
            .iter()
            .filter(|e| predicate(e))
            .cloned()
            .collect()
    }
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::new(AuditConfig::default())
    }
}

impl std::fmt::Debug for AuditLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLogger")
            .field("config", &self.config)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Time-based id with a random suffix
fn generate_event_id(timestamp: DateTime<Utc>) -> String {
    let suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("audit_{}_{}", timestamp.timestamp_millis(), suffix)
}
