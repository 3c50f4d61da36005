use crate::admin_audit::domain::model::{
    enums::{
        admin_audit_domain_error::AdminAuditDomainError, admin_audit_mode::AdminAuditMode,
        admin_audit_severity::AdminAuditSeverity,
    },
    value_objects::{audit_action_name::AuditActionName, audit_resource_name::AuditResourceName},
};

/// Where the middleware looks for the identifier of the affected instance
/// when the handler does not attach one itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuditResourceIdSource {
    None,
    PathParam(String),
    Actor,
}

/// Static audit configuration attached to one route.
#[derive(Clone, Debug)]
pub struct AuditedRoute {
    action: AuditActionName,
    resource: AuditResourceName,
    mode: AdminAuditMode,
    resource_id_source: AuditResourceIdSource,
    failure_severity: Option<AdminAuditSeverity>,
}

impl AuditedRoute {
    pub fn new(
        action: &str,
        resource: &str,
        mode: AdminAuditMode,
    ) -> Result<Self, AdminAuditDomainError> {
        Ok(Self {
            action: AuditActionName::new(action.to_string())?,
            resource: AuditResourceName::new(resource.to_string())?,
            mode,
            resource_id_source: AuditResourceIdSource::None,
            failure_severity: None,
        })
    }

    pub fn detailed(action: &str, resource: &str) -> Result<Self, AdminAuditDomainError> {
        Self::new(action, resource, AdminAuditMode::Detailed)
    }

    pub fn security(action: &str, resource: &str) -> Result<Self, AdminAuditDomainError> {
        Self::new(action, resource, AdminAuditMode::Security)
    }

    pub fn with_resource_id_from_path(mut self, param: &str) -> Self {
        self.resource_id_source = AuditResourceIdSource::PathParam(param.to_string());
        self
    }

    pub fn with_resource_id_from_actor(mut self) -> Self {
        self.resource_id_source = AuditResourceIdSource::Actor;
        self
    }

    pub fn with_failure_severity(mut self, severity: AdminAuditSeverity) -> Self {
        self.failure_severity = Some(severity);
        self
    }

    pub fn action(&self) -> &AuditActionName {
        &self.action
    }

    pub fn resource(&self) -> &AuditResourceName {
        &self.resource
    }

    pub fn mode(&self) -> AdminAuditMode {
        self.mode
    }

    pub fn resource_id_source(&self) -> &AuditResourceIdSource {
        &self.resource_id_source
    }

    pub fn failure_severity(&self) -> Option<AdminAuditSeverity> {
        self.failure_severity
    }
}
