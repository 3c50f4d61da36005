use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
};

use crate::admin_audit::{
    domain::model::events::admin_action_audited_event::AdminActionAuditedEvent,
    infrastructure::persistence::repositories::admin_audit_log_repository::AdminAuditLogRepository,
};

pub const DEFAULT_AUDIT_QUEUE_CAPACITY: usize = 1024;

/// Bounded, fire-and-forget hand-off between request tasks and the single
/// task that appends audit entries to the store.
///
/// When the queue is full the new event is dropped and counted; request
/// tasks never wait on the store.
#[derive(Clone)]
pub struct AdminAuditEventDispatcher {
    sender: mpsc::Sender<AdminActionAuditedEvent>,
    dropped_events: Arc<AtomicU64>,
}

impl AdminAuditEventDispatcher {
    /// Spawns the writer task. It exits once every dispatcher clone has been
    /// dropped and the queue is drained.
    pub fn spawn(
        repository: Arc<dyn AdminAuditLogRepository>,
        capacity: usize,
    ) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let writer = tokio::spawn(write_events(repository, receiver));

        (
            Self {
                sender,
                dropped_events: Arc::new(AtomicU64::new(0)),
            },
            writer,
        )
    }

    pub fn dispatch(&self, event: AdminActionAuditedEvent) {
        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                let dropped = self.dropped_events.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::warn!(
                    action = event.action().value(),
                    resource = event.resource().value(),
                    request_id = event.request_id(),
                    dropped_total = dropped,
                    "audit queue full, dropping event"
                );
            }
            Err(TrySendError::Closed(event)) => {
                self.dropped_events.fetch_add(1, Ordering::Relaxed);
                tracing::error!(
                    action = event.action().value(),
                    resource = event.resource().value(),
                    request_id = event.request_id(),
                    "audit writer stopped, dropping event"
                );
            }
        }
    }

    pub fn dropped_events(&self) -> u64 {
        self.dropped_events.load(Ordering::Relaxed)
    }
}

async fn write_events(
    repository: Arc<dyn AdminAuditLogRepository>,
    mut receiver: mpsc::Receiver<AdminActionAuditedEvent>,
) {
    while let Some(event) = receiver.recv().await {
        match repository.save_event(&event).await {
            Ok(entry_id) => {
                tracing::debug!(
                    entry_id,
                    action = event.action().value(),
                    outcome = event.outcome().as_str(),
                    request_id = event.request_id(),
                    "audit entry recorded"
                );
            }
            Err(error) => {
                tracing::error!(
                    action = event.action().value(),
                    resource = event.resource().value(),
                    outcome = event.outcome().as_str(),
                    request_id = event.request_id(),
                    error = %error,
                    "failed to record audit entry"
                );
            }
        }
    }

    tracing::debug!("audit writer finished");
}
