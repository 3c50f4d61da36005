pub mod admin_action_audit_event_builder;
