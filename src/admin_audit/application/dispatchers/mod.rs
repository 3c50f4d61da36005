pub mod admin_audit_event_dispatcher;
