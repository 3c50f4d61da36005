use std::{any::Any, net::SocketAddr, panic, sync::Arc};

use axum::{
    body::{Body, Bytes, HttpBody, to_bytes},
    extract::{ConnectInfo, FromRequestParts, RawPathParams, Request, State},
    http::{
        HeaderMap, StatusCode,
        header::{CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT},
        request::Parts,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    admin_audit::{
        application::{
            dispatchers::admin_audit_event_dispatcher::AdminAuditEventDispatcher,
            event_builders::admin_action_audit_event_builder::{
                AdminActionAuditEventBuilder, AuditStartMarker, HandlerAuditContext,
            },
        },
        domain::{
            model::value_objects::{
                audit_details::AuditDetails,
                audited_route::{AuditResourceIdSource, AuditedRoute},
                handler_audit_attachments::{AuditDetailsAttachment, AuditResourceId},
            },
            services::admin_action_outcome_classifier::HandlerTermination,
        },
    },
    iam_integration::interfaces::rest::middleware::identity_context_middleware::IdentityContext,
};

pub const DEFAULT_BODY_CAPTURE_LIMIT_BYTES: usize = 16 * 1024;
const UNKNOWN: &str = "unknown";

/// Shared audit wiring: one instance per application, specialised per route
/// with [`AdminAuditLayer::for_route`].
#[derive(Clone)]
pub struct AdminAuditLayer {
    dispatcher: AdminAuditEventDispatcher,
    builder: AdminActionAuditEventBuilder,
    body_capture_limit: usize,
    trust_forwarded_for: bool,
}

impl AdminAuditLayer {
    pub fn new(dispatcher: AdminAuditEventDispatcher) -> Self {
        Self {
            dispatcher,
            builder: AdminActionAuditEventBuilder::new(),
            body_capture_limit: DEFAULT_BODY_CAPTURE_LIMIT_BYTES,
            trust_forwarded_for: false,
        }
    }

    pub fn with_body_capture_limit(mut self, limit: usize) -> Self {
        self.body_capture_limit = limit;
        self
    }

    pub fn with_trust_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }

    /// State for `axum::middleware::from_fn_with_state(.., admin_audit_middleware)`.
    pub fn for_route(&self, route: AuditedRoute) -> AdminAuditRouteState {
        AdminAuditRouteState {
            route: Arc::new(route),
            layer: self.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AdminAuditRouteState {
    route: Arc<AuditedRoute>,
    layer: AdminAuditLayer,
}

enum ForwardedResult {
    Response(Response),
    Panic(Box<dyn Any + Send + 'static>),
    Incomplete,
}

/// Observes the wrapped handler and records exactly one audit event for the
/// request.
///
/// The handler and the observation run in their own tasks, so auditing
/// completes even if the client goes away. The response travels back to the
/// caller before the event is built and queued. A panicking handler is
/// recorded as a failure and the panic is resumed unchanged on the caller's
/// task.
pub async fn admin_audit_middleware(
    State(state): State<AdminAuditRouteState>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();
    let (body, request_details) =
        capture_request_body(&mut parts.headers, body, state.layer.body_capture_limit).await;
    let start = state.capture_start_marker(&mut parts, request_details).await;
    let request = Request::from_parts(parts, body);

    let span = tracing::info_span!(
        "admin_audit",
        action = state.route.action().value(),
        resource = state.route.resource().value(),
        request_id = %start.request_id,
    );

    let (reply_sender, reply_receiver) = oneshot::channel();
    tokio::spawn(observe(state, start, request, next, reply_sender).instrument(span));

    match reply_receiver.await {
        Ok(ForwardedResult::Response(response)) => response,
        Ok(ForwardedResult::Panic(payload)) => panic::resume_unwind(payload),
        Ok(ForwardedResult::Incomplete) | Err(_) => {
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn observe(
    state: AdminAuditRouteState,
    start: AuditStartMarker,
    request: Request,
    next: Next,
    reply: oneshot::Sender<ForwardedResult>,
) {
    let handler = tokio::spawn(next.run(request).in_current_span());

    let (termination, handler_context, forwarded) = match handler.await {
        Ok(response) => {
            let (response, termination, handler_context) =
                inspect_response(response, state.layer.body_capture_limit).await;
            (
                termination,
                handler_context,
                ForwardedResult::Response(response),
            )
        }
        Err(join_error) if join_error.is_panic() => {
            let payload = join_error.into_panic();
            (
                HandlerTermination::Panicked {
                    message: panic_message(payload.as_ref()),
                },
                HandlerAuditContext::default(),
                ForwardedResult::Panic(payload),
            )
        }
        Err(_) => (
            HandlerTermination::Incomplete,
            HandlerAuditContext::default(),
            ForwardedResult::Incomplete,
        ),
    };

    if reply.send(forwarded).is_err() {
        tracing::debug!("caller went away before the response was delivered");
    }

    let event = state
        .layer
        .builder
        .build(&state.route, &start, &termination, handler_context);

    tracing::debug!(
        outcome = event.outcome().as_str(),
        severity = event.severity().as_str(),
        "admin action observed"
    );

    state.layer.dispatcher.dispatch(event);
}

impl AdminAuditRouteState {
    async fn capture_start_marker(
        &self,
        parts: &mut Parts,
        request_details: AuditDetails,
    ) -> AuditStartMarker {
        let actor_id = parts
            .extensions
            .get::<IdentityContext>()
            .and_then(IdentityContext::current_actor_id);

        let path_resource_id = match self.route.resource_id_source() {
            AuditResourceIdSource::PathParam(name) => RawPathParams::from_request_parts(parts, &())
                .await
                .ok()
                .and_then(|params| {
                    params
                        .iter()
                        .find(|(key, _)| *key == name.as_str())
                        .map(|(_, value)| value.to_string())
                }),
            AuditResourceIdSource::Actor | AuditResourceIdSource::None => None,
        };

        AuditStartMarker {
            request_id: header_value(&parts.headers, "x-request-id")
                .unwrap_or_else(|| Uuid::now_v7().to_string()),
            actor_id,
            source_address: source_address(parts, self.layer.trust_forwarded_for),
            client_agent: header_value(&parts.headers, USER_AGENT.as_str())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            path_resource_id,
            request_details,
        }
    }
}

async fn capture_request_body(
    headers: &mut HeaderMap,
    body: Body,
    limit: usize,
) -> (Body, AuditDetails) {
    if !is_json(headers) || !fits_capture_limit(&body, limit) {
        return (body, AuditDetails::new());
    }

    match to_bytes(body, limit).await {
        Ok(bytes) => {
            let details = serde_json::from_slice::<Value>(&bytes)
                .map(|value| AuditDetails::primitives_of(&value))
                .unwrap_or_default();
            (Body::from(bytes), details)
        }
        Err(error) => {
            tracing::warn!(error = %error, "could not buffer request body for audit capture");
            headers.remove(CONTENT_LENGTH);
            (Body::empty(), AuditDetails::new())
        }
    }
}

async fn inspect_response(
    response: Response,
    limit: usize,
) -> (Response, HandlerTermination, HandlerAuditContext) {
    let (mut parts, body) = response.into_parts();
    let handler_context = HandlerAuditContext {
        resource_id: parts.extensions.remove::<AuditResourceId>(),
        details: parts.extensions.remove::<AuditDetailsAttachment>(),
    };
    let status = parts.status.as_u16();

    if !is_json(&parts.headers) || !fits_capture_limit(&body, limit) {
        return (
            Response::from_parts(parts, body),
            HandlerTermination::responded(status),
            handler_context,
        );
    }

    match to_bytes(body, limit).await {
        Ok(bytes) => {
            let (declared_success, declared_error) = read_declarations(&bytes);
            (
                Response::from_parts(parts, Body::from(bytes)),
                HandlerTermination::Responded {
                    status,
                    declared_success,
                    declared_error,
                },
                handler_context,
            )
        }
        Err(error) => {
            tracing::warn!(error = %error, "response body could not be read back");
            parts.headers.remove(CONTENT_LENGTH);
            (
                Response::from_parts(parts, Body::empty()),
                HandlerTermination::Incomplete,
                handler_context,
            )
        }
    }
}

/// Reads the `success` flag and the `error` (or `message`) string a JSON
/// response body declares about itself.
fn read_declarations(bytes: &Bytes) -> (Option<bool>, Option<String>) {
    let Ok(Value::Object(object)) = serde_json::from_slice::<Value>(bytes) else {
        return (None, None);
    };

    let declared_success = object.get("success").and_then(Value::as_bool);
    let declared_error = ["error", "message"]
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .map(str::to_string);

    (declared_success, declared_error)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase())
        .is_some_and(|v| v.starts_with("application/json") || v.contains("+json"))
}

fn fits_capture_limit(body: &Body, limit: usize) -> bool {
    body.size_hint()
        .upper()
        .is_some_and(|upper| upper > 0 && upper <= limit as u64)
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn source_address(parts: &Parts, trust_forwarded_for: bool) -> String {
    let forwarded = if trust_forwarded_for {
        header_value(&parts.headers, "x-forwarded-for").and_then(|raw| {
            raw.split(',')
                .next()
                .map(str::trim)
                .filter(|hop| !hop.is_empty())
                .map(str::to_string)
        })
    } else {
        None
    };

    forwarded
        .or_else(|| {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    payload
        .downcast_ref::<&'static str>()
        .map(|message| message.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
}
