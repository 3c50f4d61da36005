pub mod admin_action_audited_event;
