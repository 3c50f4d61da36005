pub mod admin_audit_middleware;
