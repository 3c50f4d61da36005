pub mod admin_audit_domain_error;
pub mod admin_audit_mode;
pub mod admin_audit_outcome;
pub mod admin_audit_severity;
