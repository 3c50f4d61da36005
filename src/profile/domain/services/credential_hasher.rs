use crate::profile::domain::model::enums::profile_domain_error::ProfileDomainError;

pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, ProfileDomainError>;

    fn verify(&self, plain: &str, stored_hash: &str) -> Result<bool, ProfileDomainError>;
}
