use crate::admin_audit::domain::model::{
    enums::admin_audit_mode::AdminAuditMode, value_objects::classified_outcome::ClassifiedOutcome,
};

pub const GENERIC_FAILURE_SUMMARY: &str = "request failed";
pub const INCOMPLETE_RESPONSE_SUMMARY: &str = "request failed: response incomplete";

/// How a wrapped handler finished, as observed by the audit middleware.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HandlerTermination {
    Responded {
        status: u16,
        declared_success: Option<bool>,
        declared_error: Option<String>,
    },
    Panicked {
        message: Option<String>,
    },
    /// No readable response was produced: the handler task was cancelled or
    /// its body could not be read back.
    Incomplete,
}

impl HandlerTermination {
    pub fn responded(status: u16) -> Self {
        Self::Responded {
            status,
            declared_success: None,
            declared_error: None,
        }
    }
}

/// Maps a handler termination to outcome, severity and error summary.
///
/// A 2xx/3xx response is a success unless its body declares
/// `success: false`. Everything else is a failure whose summary prefers the
/// panic message, then the error string declared by the response body, then
/// a generic message.
pub fn classify(termination: &HandlerTermination, mode: AdminAuditMode) -> ClassifiedOutcome {
    match termination {
        HandlerTermination::Responded {
            status,
            declared_success,
            declared_error,
        } => {
            let status_ok = (200..=399).contains(status);
            if status_ok && *declared_success != Some(false) {
                return ClassifiedOutcome::success(mode.success_severity());
            }

            let summary = non_blank(declared_error.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| format!("{GENERIC_FAILURE_SUMMARY} (status {status})"));

            ClassifiedOutcome::failure(mode.failure_severity(), summary)
        }
        HandlerTermination::Panicked { message } => {
            let summary = non_blank(message.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| GENERIC_FAILURE_SUMMARY.to_string());

            ClassifiedOutcome::failure(mode.failure_severity(), summary)
        }
        HandlerTermination::Incomplete => {
            ClassifiedOutcome::failure(mode.failure_severity(), INCOMPLETE_RESPONSE_SUMMARY)
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
