use async_trait::async_trait;

use crate::iam_integration::domain::model::value_objects::authenticated_user_id::AuthenticatedUserId;

pub const ADMIN_ROLE: &str = "admin";

#[derive(Clone, Debug)]
pub struct VerifiedUserContext {
    pub subject_id: AuthenticatedUserId,
    pub role: String,
    pub exp_epoch_seconds: u64,
}

impl VerifiedUserContext {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IamIntegrationError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token expired")]
    ExpiredToken,
}

#[async_trait]
pub trait IamAuthenticationFacade: Send + Sync {
    async fn verify_access_token(
        &self,
        access_token: &str,
    ) -> Result<VerifiedUserContext, IamIntegrationError>;
}
