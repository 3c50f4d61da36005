use std::{sync::Arc, time::Duration};

use axum::{
    Extension, Json, Router,
    body::{Body, Bytes},
    http::{HeaderMap, StatusCode, header},
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use blog_audit_api::{
    admin_audit::{
        application::{
            dispatchers::admin_audit_event_dispatcher::AdminAuditEventDispatcher,
            query_services::admin_audit_log_query_service_impl::AdminAuditLogQueryServiceImpl,
        },
        domain::model::{
            enums::admin_audit_severity::AdminAuditSeverity,
            value_objects::{
                audit_details::AuditDetails,
                audited_route::AuditedRoute,
                handler_audit_attachments::{AuditDetailsAttachment, AuditResourceId},
            },
        },
        interfaces::rest::{
            controllers::admin_audit_log_rest_controller::{
                AdminAuditLogRestControllerState, router as admin_audit_log_router,
            },
            middleware::admin_audit_middleware::{AdminAuditLayer, admin_audit_middleware},
        },
    },
    iam_integration::interfaces::rest::middleware::identity_context_middleware::AuthenticatedActor,
    shared::interfaces::rest::app_layers::with_app_layers,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};

use super::{
    fakes::{FakeAdminAuditLogRepository, FakeIamAuthenticationFacade},
    fixtures::{BROKEN_BODY_DECLARED_LENGTH, broken_json_body},
};

pub const TEST_QUEUE_CAPACITY: usize = 64;
pub const SAVE_WAIT: Duration = Duration::from_secs(2);
pub const SLOW_HANDLER_DELAY: Duration = Duration::from_millis(300);

pub struct AuditedAppHarness {
    pub repository: Arc<FakeAdminAuditLogRepository>,
    pub app: Router,
}

pub fn create_harness(repository: FakeAdminAuditLogRepository) -> AuditedAppHarness {
    create_harness_with(repository, |layer| layer)
}

pub fn create_harness_with(
    repository: FakeAdminAuditLogRepository,
    configure: impl FnOnce(AdminAuditLayer) -> AdminAuditLayer,
) -> AuditedAppHarness {
    let repository = Arc::new(repository);
    let (dispatcher, _writer) =
        AdminAuditEventDispatcher::spawn(repository.clone(), TEST_QUEUE_CAPACITY);
    let layer = configure(AdminAuditLayer::new(dispatcher));

    let routes = Router::new()
        .route(
            "/api/posts/:post_id",
            put(update_post).route_layer(from_fn_with_state(
                layer.for_route(AuditedRoute::detailed("update_post", "posts")
                    .expect("valid route")
                    .with_resource_id_from_path("post_id")),
                admin_audit_middleware,
            )),
        )
        .route(
            "/api/posts",
            post(create_post).route_layer(from_fn_with_state(
                layer.for_route(AuditedRoute::detailed("create_post", "posts").expect("valid route")),
                admin_audit_middleware,
            )),
        )
        .route(
            "/api/reviews/reject",
            post(reject_post).route_layer(from_fn_with_state(
                layer.for_route(AuditedRoute::detailed("reject_post", "posts").expect("valid route")),
                admin_audit_middleware,
            )),
        )
        .route(
            "/api/publications",
            post(declare_failure).route_layer(from_fn_with_state(
                layer.for_route(AuditedRoute::detailed("publish_post", "posts").expect("valid route")),
                admin_audit_middleware,
            )),
        )
        .route(
            "/api/archive",
            post(panicking_handler).route_layer(from_fn_with_state(
                layer.for_route(AuditedRoute::detailed("archive_post", "posts")
                    .expect("valid route")
                    .with_failure_severity(AdminAuditSeverity::Error)),
                admin_audit_middleware,
            )),
        )
        .route(
            "/api/tags",
            post(bad_attachment).route_layer(from_fn_with_state(
                layer.for_route(AuditedRoute::detailed("tag_post", "posts").expect("valid route")),
                admin_audit_middleware,
            )),
        )
        .route(
            "/api/keys/rotate",
            post(rotate_key).route_layer(from_fn_with_state(
                layer.for_route(AuditedRoute::security("rotate_api_key", "api_keys")
                    .expect("valid route")
                    .with_resource_id_from_actor()),
                admin_audit_middleware,
            )),
        )
        .route(
            "/api/me/settings",
            put(update_settings).route_layer(from_fn_with_state(
                layer.for_route(AuditedRoute::detailed("update_settings", "users")
                    .expect("valid route")
                    .with_resource_id_from_actor()),
                admin_audit_middleware,
            )),
        )
        .route(
            "/api/imports",
            post(slow_import).route_layer(from_fn_with_state(
                layer.for_route(AuditedRoute::detailed("import_posts", "posts").expect("valid route")),
                admin_audit_middleware,
            )),
        )
        .route(
            "/api/drafts",
            post(broken_draft).route_layer(from_fn_with_state(
                layer.for_route(AuditedRoute::detailed("save_draft", "posts").expect("valid route")),
                admin_audit_middleware,
            )),
        )
        .route(
            "/api/uploads",
            post(describe_upload).route_layer(from_fn_with_state(
                layer.for_route(AuditedRoute::detailed("upload_media", "media").expect("valid route")),
                admin_audit_middleware,
            )),
        )
        .route(
            "/api/health",
            get(|| async { Json(json!({ "success": true })) }),
        );

    let query_service = Arc::new(AdminAuditLogQueryServiceImpl::new(repository.clone()));
    let app = with_app_layers(
        routes.merge(admin_audit_log_router(AdminAuditLogRestControllerState {
            query_service,
        })),
        Arc::new(FakeIamAuthenticationFacade),
    );

    AuditedAppHarness { repository, app }
}

pub async fn read_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

async fn update_post(Json(_payload): Json<Value>) -> impl IntoResponse {
    let mut details = AuditDetails::new();
    details.insert("title_changed", true);

    (
        Extension(AuditDetailsAttachment::from_details(&details)),
        Json(json!({ "success": true, "message": "post updated" })),
    )
}

async fn create_post(Json(_payload): Json<Value>) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        Extension(AuditResourceId("501".to_string())),
        Json(json!({ "success": true, "id": 501 })),
    )
}

async fn reject_post() -> impl IntoResponse {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": "title is required" })),
    )
}

async fn declare_failure() -> impl IntoResponse {
    Json(json!({ "success": false, "error": "nothing to publish" }))
}

async fn slow_import() -> impl IntoResponse {
    tokio::time::sleep(SLOW_HANDLER_DELAY).await;
    Json(json!({ "success": true, "imported": 3 }))
}

async fn broken_draft() -> Response {
    Response::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, BROKEN_BODY_DECLARED_LENGTH)
        .body(broken_json_body())
        .expect("valid response")
}

async fn describe_upload(headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "content_length": headers
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok()),
        "received": body.len(),
    }))
}

async fn panicking_handler() -> Response<Body> {
    panic!("storage exploded")
}

async fn bad_attachment(Json(_payload): Json<Value>) -> impl IntoResponse {
    (
        Extension(AuditDetailsAttachment::from_serializable(&vec![1, 2, 3])),
        Json(json!({ "success": true })),
    )
}

async fn rotate_key(
    AuthenticatedActor(_user): AuthenticatedActor,
    Json(_payload): Json<Value>,
) -> impl IntoResponse {
    let mut details = AuditDetails::new();
    details.insert("rotated", true);
    details.insert("new_token", "tok_live_123");

    (
        Extension(AuditDetailsAttachment::from_details(&details)),
        Json(json!({ "success": true, "message": "key rotated" })),
    )
}

async fn update_settings(
    AuthenticatedActor(user): AuthenticatedActor,
    Json(_payload): Json<Value>,
) -> impl IntoResponse {
    Json(json!({ "success": true, "user": user.subject_id.value() }))
}
