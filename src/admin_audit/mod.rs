use std::sync::Arc;

use axum::Router;
use tokio::task::JoinHandle;

use crate::{
    admin_audit::{
        application::{
            dispatchers::admin_audit_event_dispatcher::AdminAuditEventDispatcher,
            query_services::admin_audit_log_query_service_impl::AdminAuditLogQueryServiceImpl,
        },
        infrastructure::persistence::repositories::admin_audit_log_repository::AdminAuditLogRepository,
        interfaces::rest::{
            controllers::admin_audit_log_rest_controller::{
                AdminAuditLogRestControllerState, router,
            },
            middleware::admin_audit_middleware::AdminAuditLayer,
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub struct AdminAuditModule {
    /// Attach to audited routes through `AdminAuditLayer::for_route`.
    pub audit_layer: AdminAuditLayer,
    /// Read side: `GET /api/admin/logs`.
    pub router: Router,
    /// Writer task; finishes once every audit layer clone is dropped.
    pub writer: JoinHandle<()>,
}

pub fn build_admin_audit_module(
    config: &AppConfig,
    repository: Arc<dyn AdminAuditLogRepository>,
) -> AdminAuditModule {
    let (dispatcher, writer) =
        AdminAuditEventDispatcher::spawn(repository.clone(), config.audit_queue_capacity);

    let audit_layer = AdminAuditLayer::new(dispatcher)
        .with_body_capture_limit(config.audit_body_capture_limit_bytes)
        .with_trust_forwarded_for(config.audit_trust_forwarded_for);

    let query_service = Arc::new(AdminAuditLogQueryServiceImpl::new(repository));

    AdminAuditModule {
        audit_layer,
        router: router(AdminAuditLogRestControllerState { query_service }),
        writer,
    }
}
