use async_trait::async_trait;

use crate::profile::domain::model::enums::profile_domain_error::ProfileDomainError;

#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    async fn is_username_taken_by_other(
        &self,
        username: &str,
        user_id: i64,
    ) -> Result<bool, ProfileDomainError>;

    /// Returns `false` when no user row matched.
    async fn update_profile(
        &self,
        user_id: i64,
        username: &str,
        bio: Option<&str>,
        avatar: Option<&str>,
    ) -> Result<bool, ProfileDomainError>;

    async fn find_password_hash(&self, user_id: i64) -> Result<Option<String>, ProfileDomainError>;

    async fn update_password_hash(
        &self,
        user_id: i64,
        password_hash: &str,
    ) -> Result<bool, ProfileDomainError>;

    async fn update_avatar(&self, user_id: i64, avatar: &str) -> Result<bool, ProfileDomainError>;
}
