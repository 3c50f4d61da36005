use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::Router;
use blog_audit_api::{
    admin_audit::{
        AdminAuditModule, build_admin_audit_module,
        infrastructure::persistence::repositories::postgres::sqlx_admin_audit_log_repository_impl::SqlxAdminAuditLogRepositoryImpl,
        interfaces::rest::resources::{
            admin_audit_log_resource::{AdminAuditLogPageResource, AdminAuditLogResource},
            list_admin_audit_logs_query_resource::ListAdminAuditLogsQueryResource,
        },
    },
    config::app_config::AppConfig,
    iam_integration::application::acl::jwt_iam_authentication_facade_impl::JwtIamAuthenticationFacadeImpl,
    profile::{
        build_profile_router,
        interfaces::rest::resources::{
            change_password_request_resource::ChangePasswordRequestResource,
            profile_mutation_response_resource::ProfileMutationResponseResource,
            update_avatar_request_resource::UpdateAvatarRequestResource,
            update_profile_request_resource::UpdateProfileRequestResource,
        },
    },
    shared::interfaces::rest::{
        app_layers::with_app_layers, openapi::security::BearerSecurityAddon,
        resources::error_response_resource::ErrorResponseResource,
    },
};
use dotenvy::dotenv;
use sqlx::{PgPool, migrate};
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        blog_audit_api::admin_audit::interfaces::rest::controllers::admin_audit_log_rest_controller::list_admin_audit_logs,
        blog_audit_api::profile::interfaces::rest::controllers::profile_rest_controller::update_profile,
        blog_audit_api::profile::interfaces::rest::controllers::profile_rest_controller::change_password,
        blog_audit_api::profile::interfaces::rest::controllers::profile_rest_controller::update_avatar
    ),
    components(
        schemas(
            AdminAuditLogResource,
            AdminAuditLogPageResource,
            ListAdminAuditLogsQueryResource,
            UpdateProfileRequestResource,
            ChangePasswordRequestResource,
            UpdateAvatarRequestResource,
            ProfileMutationResponseResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "admin-audit", description = "Administrative action audit trail"),
        (name = "profile", description = "Audited profile mutations")
    ),
    modifiers(&BearerSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().expect("invalid configuration");

    let pool = PgPool::connect(&config.database_url())
        .await
        .expect("failed to connect to postgres");

    migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let AdminAuditModule {
        audit_layer,
        router: admin_audit_router,
        writer,
    } = build_admin_audit_module(
        &config,
        Arc::new(SqlxAdminAuditLogRepositoryImpl::new(pool.clone())),
    );

    let profile_router =
        build_profile_router(pool, &audit_layer).expect("failed to build profile router");
    drop(audit_layer);

    let iam_facade = Arc::new(JwtIamAuthenticationFacadeImpl::new(&config.jwt_secret));

    let app = with_app_layers(
        Router::new().merge(profile_router).merge(admin_audit_router),
        iam_facade,
    )
    .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(port = config.port, "server listening");
    tracing::info!(
        url = %format!("http://localhost:{}/swagger-ui", config.port),
        "swagger ui available"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("failed to start axum server");

    let grace = Duration::from_secs(config.audit_shutdown_grace_seconds);
    match tokio::time::timeout(grace, writer).await {
        Ok(Ok(())) => tracing::info!("audit queue drained"),
        Ok(Err(error)) => tracing::error!(error = %error, "audit writer task failed"),
        Err(_) => tracing::warn!(
            grace_seconds = config.audit_shutdown_grace_seconds,
            "audit queue not drained before shutdown grace period elapsed"
        ),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(error = %error, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(error = %error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
