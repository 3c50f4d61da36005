pub mod admin_audit_log_repository;
pub mod postgres;
