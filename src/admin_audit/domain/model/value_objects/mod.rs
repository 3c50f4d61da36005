pub mod audit_action_name;
pub mod audit_details;
pub mod audit_resource_name;
mod audit_token;
pub mod audited_route;
pub mod classified_outcome;
pub mod handler_audit_attachments;
