use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::put,
};
use validator::Validate;

use crate::{
    admin_audit::{
        domain::model::{
            enums::admin_audit_domain_error::AdminAuditDomainError,
            value_objects::{
                audit_details::AuditDetails, audited_route::AuditedRoute,
                handler_audit_attachments::AuditDetailsAttachment,
            },
        },
        interfaces::rest::middleware::admin_audit_middleware::{
            AdminAuditLayer, admin_audit_middleware,
        },
    },
    iam_integration::interfaces::rest::middleware::identity_context_middleware::AuthenticatedActor,
    profile::{
        domain::{
            model::{
                commands::{
                    change_password_command::ChangePasswordCommand,
                    update_avatar_command::UpdateAvatarCommand,
                    update_profile_command::UpdateProfileCommand,
                },
                enums::profile_domain_error::ProfileDomainError,
            },
            services::profile_command_service::ProfileCommandService,
        },
        interfaces::rest::resources::{
            change_password_request_resource::ChangePasswordRequestResource,
            profile_mutation_response_resource::ProfileMutationResponseResource,
            update_avatar_request_resource::UpdateAvatarRequestResource,
            update_profile_request_resource::UpdateProfileRequestResource,
        },
    },
    shared::interfaces::rest::resources::error_response_resource::ErrorResponseResource,
};

type ErrorReply = (StatusCode, Json<ErrorResponseResource>);

#[derive(Clone)]
pub struct ProfileRestControllerState {
    pub command_service: Arc<dyn ProfileCommandService>,
}

/// Every profile mutation is audited; password changes use the security
/// policy so no credential material reaches the audit store.
pub fn router(
    state: ProfileRestControllerState,
    audit_layer: &AdminAuditLayer,
) -> Result<Router, AdminAuditDomainError> {
    let update_profile_audit = audit_layer.for_route(
        AuditedRoute::detailed("update_profile", "users")?.with_resource_id_from_actor(),
    );
    let change_password_audit = audit_layer.for_route(
        AuditedRoute::security("change_password", "users")?.with_resource_id_from_actor(),
    );
    let update_avatar_audit = audit_layer.for_route(
        AuditedRoute::detailed("update_avatar", "users")?.with_resource_id_from_actor(),
    );

    Ok(Router::new()
        .route(
            "/api/profile",
            put(update_profile)
                .route_layer(from_fn_with_state(update_profile_audit, admin_audit_middleware)),
        )
        .route(
            "/api/profile/password",
            put(change_password)
                .route_layer(from_fn_with_state(change_password_audit, admin_audit_middleware)),
        )
        .route(
            "/api/profile/avatar",
            put(update_avatar)
                .route_layer(from_fn_with_state(update_avatar_audit, admin_audit_middleware)),
        )
        .with_state(state))
}

#[utoipa::path(
    put,
    path = "/api/profile",
    tag = "profile",
    request_body = UpdateProfileRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Profile updated", body = ProfileMutationResponseResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 401, description = "Authentication required", body = ErrorResponseResource),
        (status = 404, description = "User not found", body = ErrorResponseResource),
        (status = 409, description = "Username already in use", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn update_profile(
    State(state): State<ProfileRestControllerState>,
    AuthenticatedActor(user): AuthenticatedActor,
    Json(request): Json<UpdateProfileRequestResource>,
) -> Result<(Extension<AuditDetailsAttachment>, Json<ProfileMutationResponseResource>), ErrorReply>
{
    validate(&request)?;

    let mut changes = AuditDetails::new();
    changes.insert("bio_changed", request.bio.is_some());
    changes.insert("avatar_changed", request.avatar.is_some());

    let command = UpdateProfileCommand::new(
        user.subject_id.value(),
        request.username,
        request.bio,
        request.avatar,
    )
    .map_err(map_domain_error)?;

    state
        .command_service
        .handle_update_profile(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        Extension(AuditDetailsAttachment::from_details(&changes)),
        Json(ProfileMutationResponseResource::succeeded(
            "profile updated successfully",
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/profile/password",
    tag = "profile",
    request_body = ChangePasswordRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Password changed", body = ProfileMutationResponseResource),
        (status = 400, description = "Missing fields, short password or wrong current password", body = ErrorResponseResource),
        (status = 401, description = "Authentication required", body = ErrorResponseResource),
        (status = 404, description = "User not found", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn change_password(
    State(state): State<ProfileRestControllerState>,
    AuthenticatedActor(user): AuthenticatedActor,
    Json(request): Json<ChangePasswordRequestResource>,
) -> Result<Json<ProfileMutationResponseResource>, ErrorReply> {
    validate(&request)?;

    let command = ChangePasswordCommand::new(
        user.subject_id.value(),
        request.current_password,
        request.new_password,
    )
    .map_err(map_domain_error)?;

    state
        .command_service
        .handle_change_password(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ProfileMutationResponseResource::succeeded(
        "password changed successfully",
    )))
}

#[utoipa::path(
    put,
    path = "/api/profile/avatar",
    tag = "profile",
    request_body = UpdateAvatarRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Avatar updated", body = ProfileMutationResponseResource),
        (status = 400, description = "Avatar missing", body = ErrorResponseResource),
        (status = 401, description = "Authentication required", body = ErrorResponseResource),
        (status = 404, description = "User not found", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn update_avatar(
    State(state): State<ProfileRestControllerState>,
    AuthenticatedActor(user): AuthenticatedActor,
    Json(request): Json<UpdateAvatarRequestResource>,
) -> Result<Json<ProfileMutationResponseResource>, ErrorReply> {
    validate(&request)?;

    let command = UpdateAvatarCommand::new(user.subject_id.value(), request.avatar)
        .map_err(map_domain_error)?;

    state
        .command_service
        .handle_update_avatar(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ProfileMutationResponseResource::succeeded(
        "avatar updated successfully",
    )))
}

fn validate<T: Validate>(request: &T) -> Result<(), ErrorReply> {
    request.validate().map_err(|validation_error| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource {
                message: validation_error.to_string(),
            }),
        )
    })
}

fn map_domain_error(error: ProfileDomainError) -> ErrorReply {
    let status = match error {
        ProfileDomainError::UsernameRequired
        | ProfileDomainError::InvalidUsername
        | ProfileDomainError::PasswordsRequired
        | ProfileDomainError::NewPasswordTooShort
        | ProfileDomainError::CurrentPasswordIncorrect
        | ProfileDomainError::AvatarRequired => StatusCode::BAD_REQUEST,
        ProfileDomainError::UsernameTaken => StatusCode::CONFLICT,
        ProfileDomainError::UserNotFound => StatusCode::NOT_FOUND,
        ProfileDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %error, "profile mutation failed");
    }

    (
        status,
        Json(ErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
