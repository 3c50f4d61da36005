use chrono::{DateTime, Utc};

use crate::admin_audit::domain::model::{
    enums::{admin_audit_outcome::AdminAuditOutcome, admin_audit_severity::AdminAuditSeverity},
    value_objects::{
        audit_action_name::AuditActionName, audit_details::AuditDetails,
        audit_resource_name::AuditResourceName, classified_outcome::ClassifiedOutcome,
    },
};

/// One observed administrative action, built when the wrapped request
/// finished and not yet persisted.
#[derive(Clone, Debug)]
pub struct AdminActionAuditedEvent {
    request_id: String,
    actor_id: Option<i64>,
    action: AuditActionName,
    resource: AuditResourceName,
    resource_id: Option<String>,
    details: Option<AuditDetails>,
    source_address: String,
    client_agent: String,
    classified: ClassifiedOutcome,
    occurred_at: DateTime<Utc>,
}

pub struct AdminActionAuditedEventParts {
    pub request_id: String,
    pub actor_id: Option<i64>,
    pub action: AuditActionName,
    pub resource: AuditResourceName,
    pub resource_id: Option<String>,
    pub details: Option<AuditDetails>,
    pub source_address: String,
    pub client_agent: String,
    pub classified: ClassifiedOutcome,
    pub occurred_at: DateTime<Utc>,
}

impl AdminActionAuditedEvent {
    pub fn new(parts: AdminActionAuditedEventParts) -> Self {
        Self {
            request_id: parts.request_id,
            actor_id: parts.actor_id,
            action: parts.action,
            resource: parts.resource,
            resource_id: parts.resource_id.filter(|id| !id.trim().is_empty()),
            details: parts.details.filter(|details| !details.is_empty()),
            source_address: parts.source_address,
            client_agent: parts.client_agent,
            classified: parts.classified,
            occurred_at: parts.occurred_at,
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn actor_id(&self) -> Option<i64> {
        self.actor_id
    }
    pub fn action(&self) -> &AuditActionName {
        &self.action
    }
    pub fn resource(&self) -> &AuditResourceName {
        &self.resource
    }
    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }
    pub fn details(&self) -> Option<&AuditDetails> {
        self.details.as_ref()
    }
    pub fn source_address(&self) -> &str {
        &self.source_address
    }
    pub fn client_agent(&self) -> &str {
        &self.client_agent
    }
    pub fn outcome(&self) -> AdminAuditOutcome {
        self.classified.outcome()
    }
    pub fn severity(&self) -> AdminAuditSeverity {
        self.classified.severity()
    }
    pub fn error_detail(&self) -> Option<&str> {
        self.classified.error_detail()
    }
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
