pub mod admin_audit_log_entry;
pub mod admin_audit_log_page;
