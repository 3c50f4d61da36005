use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::admin_audit::domain::model::{
    entities::admin_audit_log_entry::AdminAuditLogEntry,
    enums::{
        admin_audit_domain_error::AdminAuditDomainError, admin_audit_outcome::AdminAuditOutcome,
    },
    events::admin_action_audited_event::AdminActionAuditedEvent,
};

#[derive(Clone, Debug, Default)]
pub struct AdminAuditLogCriteria {
    pub actor_id: Option<i64>,
    pub action: Option<String>,
    pub resource: Option<String>,
    pub outcome: Option<AdminAuditOutcome>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Clone, Debug)]
pub struct AdminAuditLogListing {
    pub entries: Vec<AdminAuditLogEntry>,
    pub total: u64,
}

/// Append-only audit storage: entries are never updated or deleted.
#[async_trait]
pub trait AdminAuditLogRepository: Send + Sync {
    /// Appends one entry and returns its assigned id. `recorded_at` is set by
    /// the store at write time.
    async fn save_event(&self, event: &AdminActionAuditedEvent)
    -> Result<i64, AdminAuditDomainError>;

    /// Matching entries ordered most recent first, plus the unpaged total.
    async fn list(
        &self,
        criteria: &AdminAuditLogCriteria,
    ) -> Result<AdminAuditLogListing, AdminAuditDomainError>;
}
