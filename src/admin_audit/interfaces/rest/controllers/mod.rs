pub mod admin_audit_log_rest_controller;
