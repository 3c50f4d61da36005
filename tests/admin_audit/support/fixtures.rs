use axum::{
    body::{Body, Bytes},
    http::{Method, Request, header},
};
use blog_audit_api::admin_audit::{
    application::event_builders::admin_action_audit_event_builder::{
        AdminActionAuditEventBuilder, AuditStartMarker, HandlerAuditContext,
    },
    domain::{
        model::{
            events::admin_action_audited_event::AdminActionAuditedEvent,
            value_objects::{audit_details::AuditDetails, audited_route::AuditedRoute},
        },
        services::admin_action_outcome_classifier::HandlerTermination,
    },
};
use http_body_util::{Full, Limited};
use serde_json::Value;

pub const BROKEN_BODY_DECLARED_LENGTH: usize = 24;

/// A JSON body that announces [`BROKEN_BODY_DECLARED_LENGTH`] bytes through a
/// `Content-Length` header and fails after announcing only five.
pub fn broken_json_body() -> Body {
    let payload = Bytes::from_static(br#"{"title":"a long title"}"#);
    Body::new(Limited::new(Full::new(payload), 5))
}

pub fn start_marker(actor_id: Option<i64>) -> AuditStartMarker {
    AuditStartMarker {
        request_id: "req-1".to_string(),
        actor_id,
        source_address: "10.0.0.7".to_string(),
        client_agent: "integration-test".to_string(),
        path_resource_id: None,
        request_details: AuditDetails::new(),
    }
}

pub fn built_event(
    action: &str,
    resource: &str,
    actor_id: Option<i64>,
    status: u16,
) -> AdminActionAuditedEvent {
    let route = AuditedRoute::detailed(action, resource).expect("valid route");
    AdminActionAuditEventBuilder::new().build(
        &route,
        &start_marker(actor_id),
        &HandlerTermination::responded(status),
        HandlerAuditContext::default(),
    )
}

pub fn broken_json_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, BROKEN_BODY_DECLARED_LENGTH)
        .header(header::USER_AGENT, "integration-test");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    builder.body(broken_json_body()).expect("valid request")
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::USER_AGENT, "integration-test");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    builder
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    builder.body(Body::empty()).expect("valid request")
}
