use blog_audit_api::iam_integration::{
    application::acl::jwt_iam_authentication_facade_impl::{
        AccessTokenClaims, JwtIamAuthenticationFacadeImpl,
    },
    interfaces::acl::iam_authentication_facade::{IamAuthenticationFacade, IamIntegrationError},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

const SECRET: &str = "test-secret";

fn token_for(claims: &impl serde::Serialize, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encodable claims")
}

fn in_one_hour() -> u64 {
    (Utc::now() + Duration::hours(1)).timestamp() as u64
}

#[tokio::test]
async fn valid_token_yields_subject_and_role() {
    let facade = JwtIamAuthenticationFacadeImpl::new(SECRET);
    let token = token_for(
        &AccessTokenClaims {
            sub: "42".to_string(),
            role: "admin".to_string(),
            exp: in_one_hour(),
        },
        SECRET,
    );

    let user = facade.verify_access_token(&token).await.expect("verified");

    assert_eq!(user.subject_id.value(), 42);
    assert!(user.is_admin());
}

#[tokio::test]
async fn missing_role_defaults_to_regular_user() {
    let facade = JwtIamAuthenticationFacadeImpl::new(SECRET);
    let token = token_for(&json!({ "sub": "7", "exp": in_one_hour() }), SECRET);

    let user = facade.verify_access_token(&token).await.expect("verified");

    assert_eq!(user.role, "user");
    assert!(!user.is_admin());
}

#[tokio::test]
async fn expired_token_is_reported_as_expired() {
    let facade = JwtIamAuthenticationFacadeImpl::new(SECRET);
    let expired = (Utc::now() - Duration::hours(2)).timestamp() as u64;
    let token = token_for(&json!({ "sub": "7", "exp": expired }), SECRET);

    let result = facade.verify_access_token(&token).await;

    assert!(matches!(result, Err(IamIntegrationError::ExpiredToken)));
}

#[tokio::test]
async fn foreign_signature_and_bad_subject_are_invalid() {
    let facade = JwtIamAuthenticationFacadeImpl::new(SECRET);
    let forged = token_for(&json!({ "sub": "7", "exp": in_one_hour() }), "other-secret");
    let non_numeric = token_for(&json!({ "sub": "alice", "exp": in_one_hour() }), SECRET);

    assert!(matches!(
        facade.verify_access_token(&forged).await,
        Err(IamIntegrationError::InvalidToken(_))
    ));
    assert!(matches!(
        facade.verify_access_token(&non_numeric).await,
        Err(IamIntegrationError::InvalidToken(_))
    ));
    assert!(matches!(
        facade.verify_access_token("").await,
        Err(IamIntegrationError::InvalidToken(_))
    ));
}
