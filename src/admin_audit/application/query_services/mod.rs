pub mod admin_audit_log_query_service_impl;
