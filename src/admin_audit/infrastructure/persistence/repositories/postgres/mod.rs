pub mod sqlx_admin_audit_log_repository_impl;
