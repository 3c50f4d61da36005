use crate::admin_audit::domain::model::enums::{
    admin_audit_outcome::AdminAuditOutcome, admin_audit_severity::AdminAuditSeverity,
};

/// Outcome, severity and error summary of one observed request.
///
/// The error detail is present exactly when the outcome is a failure; the
/// two constructors are the only way to build a value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassifiedOutcome {
    outcome: AdminAuditOutcome,
    severity: AdminAuditSeverity,
    error_detail: Option<String>,
}

impl ClassifiedOutcome {
    pub fn success(severity: AdminAuditSeverity) -> Self {
        Self {
            outcome: AdminAuditOutcome::Success,
            severity,
            error_detail: None,
        }
    }

    pub fn failure(severity: AdminAuditSeverity, error_detail: impl Into<String>) -> Self {
        let error_detail = error_detail.into();
        let error_detail = if error_detail.trim().is_empty() {
            "request failed".to_string()
        } else {
            error_detail
        };

        Self {
            outcome: AdminAuditOutcome::Failure,
            severity,
            error_detail: Some(error_detail),
        }
    }

    pub fn with_severity(mut self, severity: AdminAuditSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn outcome(&self) -> AdminAuditOutcome {
        self.outcome
    }

    pub fn severity(&self) -> AdminAuditSeverity {
        self.severity
    }

    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }

    pub fn is_failure(&self) -> bool {
        self.outcome == AdminAuditOutcome::Failure
    }
}
