use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    admin_audit::interfaces::rest::middleware::admin_audit_middleware::AdminAuditLayer,
    profile::{
        application::command_services::profile_command_service_impl::ProfileCommandServiceImpl,
        infrastructure::{
            persistence::repositories::postgres::sqlx_user_profile_repository_impl::SqlxUserProfileRepositoryImpl,
            security::argon2_credential_hasher_impl::Argon2CredentialHasherImpl,
        },
        interfaces::rest::controllers::profile_rest_controller::{
            ProfileRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_profile_router(pool: PgPool, audit_layer: &AdminAuditLayer) -> Result<Router, String> {
    let repository = Arc::new(SqlxUserProfileRepositoryImpl::new(pool));
    let hasher = Arc::new(Argon2CredentialHasherImpl::new());
    let command_service = Arc::new(ProfileCommandServiceImpl::new(repository, hasher));

    router(ProfileRestControllerState { command_service }, audit_layer).map_err(|e| e.to_string())
}
