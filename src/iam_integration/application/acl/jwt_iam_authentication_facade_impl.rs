use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};

use crate::iam_integration::{
    domain::model::value_objects::authenticated_user_id::AuthenticatedUserId,
    interfaces::acl::iam_authentication_facade::{
        IamAuthenticationFacade, IamIntegrationError, VerifiedUserContext,
    },
};

/// Claims carried by access tokens issued by the blog's auth service.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AccessTokenClaims {
    pub sub: String,
    #[serde(default = "default_role")]
    pub role: String,
    pub exp: u64,
}

fn default_role() -> String {
    "user".to_string()
}

/// Verifies HS256 access tokens locally with the shared secret.
pub struct JwtIamAuthenticationFacadeImpl {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtIamAuthenticationFacadeImpl {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["sub", "exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl IamAuthenticationFacade for JwtIamAuthenticationFacadeImpl {
    async fn verify_access_token(
        &self,
        access_token: &str,
    ) -> Result<VerifiedUserContext, IamIntegrationError> {
        if access_token.trim().is_empty() {
            return Err(IamIntegrationError::InvalidToken(
                "access token is empty".to_string(),
            ));
        }

        let claims = jsonwebtoken::decode::<AccessTokenClaims>(
            access_token,
            &self.decoding_key,
            &self.validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => IamIntegrationError::ExpiredToken,
            _ => IamIntegrationError::InvalidToken(e.to_string()),
        })?;

        Ok(VerifiedUserContext {
            subject_id: AuthenticatedUserId::new(&claims.sub)
                .map_err(IamIntegrationError::InvalidToken)?,
            role: claims.role,
            exp_epoch_seconds: claims.exp,
        })
    }
}
