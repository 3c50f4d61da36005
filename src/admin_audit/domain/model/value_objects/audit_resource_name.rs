use crate::admin_audit::domain::model::{
    enums::admin_audit_domain_error::AdminAuditDomainError,
    value_objects::audit_token::normalize_audit_token,
};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AuditResourceName(String);

impl AuditResourceName {
    pub fn new(value: String) -> Result<Self, AdminAuditDomainError> {
        normalize_audit_token(&value)
            .map(Self)
            .ok_or(AdminAuditDomainError::InvalidResourceName)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
