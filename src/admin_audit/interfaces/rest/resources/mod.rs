pub mod admin_audit_log_resource;
pub mod list_admin_audit_logs_query_resource;
