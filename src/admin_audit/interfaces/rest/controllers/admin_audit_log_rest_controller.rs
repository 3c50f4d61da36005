use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    admin_audit::{
        domain::{
            model::{
                entities::admin_audit_log_entry::AdminAuditLogEntry,
                enums::admin_audit_domain_error::AdminAuditDomainError,
                queries::list_admin_audit_logs_query::{
                    ListAdminAuditLogsQuery, ListAdminAuditLogsQueryParts,
                },
            },
            services::admin_audit_log_query_service::AdminAuditLogQueryService,
        },
        interfaces::rest::resources::{
            admin_audit_log_resource::{AdminAuditLogPageResource, AdminAuditLogResource},
            list_admin_audit_logs_query_resource::ListAdminAuditLogsQueryResource,
        },
    },
    iam_integration::interfaces::rest::middleware::identity_context_middleware::AuthenticatedActor,
    shared::interfaces::rest::resources::error_response_resource::ErrorResponseResource,
};

#[derive(Clone)]
pub struct AdminAuditLogRestControllerState {
    pub query_service: Arc<dyn AdminAuditLogQueryService>,
}

pub fn router(state: AdminAuditLogRestControllerState) -> Router {
    Router::new()
        .route("/api/admin/logs", get(list_admin_audit_logs))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/admin/logs",
    tag = "admin-audit",
    params(ListAdminAuditLogsQueryResource),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Audit entries, most recent first", body = AdminAuditLogPageResource),
        (status = 400, description = "Invalid filters or pagination", body = ErrorResponseResource),
        (status = 401, description = "Authentication required", body = ErrorResponseResource),
        (status = 403, description = "Administrator role required", body = ErrorResponseResource),
        (status = 500, description = "Audit store unavailable", body = ErrorResponseResource)
    )
)]
pub async fn list_admin_audit_logs(
    State(state): State<AdminAuditLogRestControllerState>,
    AuthenticatedActor(user): AuthenticatedActor,
    Query(query): Query<ListAdminAuditLogsQueryResource>,
) -> Result<Json<AdminAuditLogPageResource>, (StatusCode, Json<ErrorResponseResource>)> {
    if !user.is_admin() {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponseResource {
                message: "administrator role required".to_string(),
            }),
        ));
    }

    if let Err(validation_error) = query.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let query = ListAdminAuditLogsQuery::new(ListAdminAuditLogsQueryParts {
        actor_id: query.actor_id,
        action: query.action,
        resource: query.resource,
        outcome: query.outcome,
        from: query.from,
        to: query.to,
        page: query.page,
        page_size: query.page_size,
    })
    .map_err(map_domain_error)?;

    let page = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(AdminAuditLogPageResource {
        total: page.total(),
        page: page.page(),
        page_size: page.page_size(),
        total_pages: page.total_pages(),
        logs: page.into_entries().into_iter().map(to_resource).collect(),
    }))
}

fn to_resource(entry: AdminAuditLogEntry) -> AdminAuditLogResource {
    AdminAuditLogResource {
        id: entry.id,
        actor_id: entry.actor_id,
        actor_username: entry.actor_username,
        action: entry.action,
        resource: entry.resource,
        resource_id: entry.resource_id,
        details: entry
            .details
            .and_then(|details| serde_json::to_value(details).ok()),
        source_address: entry.source_address,
        client_agent: entry.client_agent,
        outcome: entry.outcome.as_str().to_string(),
        severity: entry.severity.as_str().to_string(),
        error_detail: entry.error_detail,
        recorded_at: entry.recorded_at.to_rfc3339(),
    }
}

fn map_domain_error(error: AdminAuditDomainError) -> (StatusCode, Json<ErrorResponseResource>) {
    let status = match error {
        AdminAuditDomainError::InvalidActionName
        | AdminAuditDomainError::InvalidResourceName
        | AdminAuditDomainError::InvalidOutcome
        | AdminAuditDomainError::InvalidPagination
        | AdminAuditDomainError::InvalidTimeWindow => StatusCode::BAD_REQUEST,
        AdminAuditDomainError::DetailsSerialization(_)
        | AdminAuditDomainError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
