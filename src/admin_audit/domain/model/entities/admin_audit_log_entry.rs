use chrono::{DateTime, Utc};

use crate::admin_audit::domain::model::{
    enums::{admin_audit_outcome::AdminAuditOutcome, admin_audit_severity::AdminAuditSeverity},
    value_objects::audit_details::AuditDetails,
};

/// A persisted audit record as read back from the store, with the acting
/// user's current username when that account still exists.
#[derive(Clone, Debug)]
pub struct AdminAuditLogEntry {
    pub id: i64,
    pub actor_id: Option<i64>,
    pub actor_username: Option<String>,
    pub action: String,
    pub resource: String,
    pub resource_id: Option<String>,
    pub details: Option<AuditDetails>,
    pub source_address: String,
    pub client_agent: String,
    pub outcome: AdminAuditOutcome,
    pub severity: AdminAuditSeverity,
    pub error_detail: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
