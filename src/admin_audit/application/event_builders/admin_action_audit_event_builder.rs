use chrono::Utc;

use crate::admin_audit::domain::{
    model::{
        events::admin_action_audited_event::{
            AdminActionAuditedEvent, AdminActionAuditedEventParts,
        },
        value_objects::{
            audit_details::AuditDetails,
            audited_route::{AuditResourceIdSource, AuditedRoute},
            handler_audit_attachments::{AuditDetailsAttachment, AuditResourceId},
        },
    },
    services::admin_action_outcome_classifier::{HandlerTermination, classify},
};

/// Request context captured before the wrapped handler runs.
#[derive(Clone, Debug, Default)]
pub struct AuditStartMarker {
    pub request_id: String,
    pub actor_id: Option<i64>,
    pub source_address: String,
    pub client_agent: String,
    pub path_resource_id: Option<String>,
    pub request_details: AuditDetails,
}

/// What the handler attached to its response for the audit trail.
#[derive(Clone, Debug, Default)]
pub struct HandlerAuditContext {
    pub resource_id: Option<AuditResourceId>,
    pub details: Option<AuditDetailsAttachment>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AdminActionAuditEventBuilder;

impl AdminActionAuditEventBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(
        &self,
        route: &AuditedRoute,
        start: &AuditStartMarker,
        termination: &HandlerTermination,
        handler_context: HandlerAuditContext,
    ) -> AdminActionAuditedEvent {
        let mut classified = classify(termination, route.mode());
        if classified.is_failure() {
            if let Some(severity) = route.failure_severity() {
                classified = classified.with_severity(severity);
            }
        }

        let resource_id = handler_context
            .resource_id
            .map(|AuditResourceId(id)| id)
            .or_else(|| match route.resource_id_source() {
                AuditResourceIdSource::PathParam(_) => start.path_resource_id.clone(),
                AuditResourceIdSource::Actor => start.actor_id.map(|id| id.to_string()),
                AuditResourceIdSource::None => None,
            });

        let details = self
            .merge_details(route, start, handler_context.details)
            .scrubbed(route.mode());

        AdminActionAuditedEvent::new(AdminActionAuditedEventParts {
            request_id: start.request_id.clone(),
            actor_id: start.actor_id,
            action: route.action().clone(),
            resource: route.resource().clone(),
            resource_id,
            details: Some(details),
            source_address: start.source_address.clone(),
            client_agent: start.client_agent.clone(),
            classified,
            occurred_at: Utc::now(),
        })
    }

    fn merge_details(
        &self,
        route: &AuditedRoute,
        start: &AuditStartMarker,
        attachment: Option<AuditDetailsAttachment>,
    ) -> AuditDetails {
        let captured = start.request_details.clone();

        let Some(attachment) = attachment else {
            return captured;
        };

        match attachment.into_details() {
            Ok(handler_details) => captured.merged_with(handler_details),
            Err(error) => {
                tracing::warn!(
                    action = route.action().value(),
                    resource = route.resource().value(),
                    request_id = %start.request_id,
                    error = %error,
                    "dropping handler audit details"
                );
                captured
            }
        }
    }
}
