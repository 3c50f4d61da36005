use serde::Serialize;
use serde_json::Value;

use crate::admin_audit::domain::model::{
    enums::admin_audit_domain_error::AdminAuditDomainError,
    value_objects::audit_details::AuditDetails,
};

/// Identifier of the affected instance, attached by a handler to its
/// response extensions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditResourceId(pub String);

/// Handler supplied audit context, attached to response extensions.
///
/// Serialization happens when the attachment is created; a failure is kept
/// and surfaces when the event is built.
#[derive(Clone, Debug)]
pub struct AuditDetailsAttachment(Result<Value, String>);

impl AuditDetailsAttachment {
    pub fn from_serializable<T: Serialize + ?Sized>(payload: &T) -> Self {
        Self(serde_json::to_value(payload).map_err(|e| e.to_string()))
    }

    pub fn from_details(details: &AuditDetails) -> Self {
        Self::from_serializable(details)
    }

    pub fn into_details(self) -> Result<AuditDetails, AdminAuditDomainError> {
        let value = self.0.map_err(AdminAuditDomainError::DetailsSerialization)?;
        AuditDetails::from_json_object(&value)
    }
}
