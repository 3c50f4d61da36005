pub mod admin_action_outcome_classifier;
pub mod admin_audit_log_query_service;
