use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::{
    iam_integration::interfaces::acl::iam_authentication_facade::{
        IamAuthenticationFacade, VerifiedUserContext,
    },
    shared::interfaces::rest::resources::error_response_resource::ErrorResponseResource,
};

/// Identity resolved for the current request. Inserted into request
/// extensions by [`resolve_identity`]; empty when the request carried no
/// token or an invalid one.
#[derive(Clone, Debug, Default)]
pub struct IdentityContext {
    user: Option<VerifiedUserContext>,
}

impl IdentityContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: VerifiedUserContext) -> Self {
        Self { user: Some(user) }
    }

    pub fn current_actor_id(&self) -> Option<i64> {
        self.user.as_ref().map(|user| user.subject_id.value())
    }

    pub fn user(&self) -> Option<&VerifiedUserContext> {
        self.user.as_ref()
    }
}

pub async fn resolve_identity(
    State(facade): State<Arc<dyn IamAuthenticationFacade>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    let identity = match token {
        Some(token) => match facade.verify_access_token(&token).await {
            Ok(user) => IdentityContext::authenticated(user),
            Err(error) => {
                tracing::debug!(error = %error, "access token rejected");
                IdentityContext::anonymous()
            }
        },
        None => IdentityContext::anonymous(),
    };

    request.extensions_mut().insert(identity);
    next.run(request).await
}

/// Extractor for handlers that require an authenticated user.
#[derive(Clone, Debug)]
pub struct AuthenticatedActor(pub VerifiedUserContext);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedActor
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponseResource>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<IdentityContext>()
            .and_then(IdentityContext::user)
            .cloned()
            .map(AuthenticatedActor)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponseResource {
                        message: "authentication required".to_string(),
                    }),
                )
            })
    }
}
