pub mod list_admin_audit_logs_query;
