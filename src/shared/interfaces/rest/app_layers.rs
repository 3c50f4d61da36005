use std::{any::Any, sync::Arc};

use axum::{
    Json, Router,
    http::StatusCode,
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    iam_integration::interfaces::{
        acl::iam_authentication_facade::IamAuthenticationFacade,
        rest::middleware::identity_context_middleware::resolve_identity,
    },
    shared::interfaces::rest::resources::error_response_resource::ErrorResponseResource,
};

/// Wraps the merged application router with identity resolution, the global
/// panic handler and request tracing, innermost first.
pub fn with_app_layers(router: Router, iam_facade: Arc<dyn IamAuthenticationFacade>) -> Router {
    router
        .layer(from_fn_with_state(iam_facade, resolve_identity))
        .layer(CatchPanicLayer::custom(internal_error_for_panic))
        .layer(TraceLayer::new_for_http())
}

pub fn internal_error_for_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<&'static str>()
        .map(|message| message.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    tracing::error!(panic = %detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponseResource {
            message: "internal server error".to_string(),
        }),
    )
        .into_response()
}
