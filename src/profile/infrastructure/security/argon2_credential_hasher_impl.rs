use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;

use crate::profile::domain::{
    model::enums::profile_domain_error::ProfileDomainError,
    services::credential_hasher::CredentialHasher,
};

#[derive(Default)]
pub struct Argon2CredentialHasherImpl;

impl Argon2CredentialHasherImpl {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialHasher for Argon2CredentialHasherImpl {
    fn hash(&self, plain: &str) -> Result<String, ProfileDomainError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ProfileDomainError::InfrastructureError(e.to_string()))
    }

    fn verify(&self, plain: &str, stored_hash: &str) -> Result<bool, ProfileDomainError> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| ProfileDomainError::InfrastructureError(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok())
    }
}
