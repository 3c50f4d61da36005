use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::profile::{
    domain::model::enums::profile_domain_error::ProfileDomainError,
    infrastructure::persistence::repositories::user_profile_repository::UserProfileRepository,
};

pub struct SqlxUserProfileRepositoryImpl {
    pool: PgPool,
}

impl SqlxUserProfileRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserProfileRepository for SqlxUserProfileRepositoryImpl {
    async fn is_username_taken_by_other(
        &self,
        username: &str,
        user_id: i64,
    ) -> Result<bool, ProfileDomainError> {
        let row = sqlx::query(
            "SELECT EXISTS (SELECT 1 FROM users WHERE username = $1 AND id <> $2) AS taken",
        )
        .bind(username)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_infra_error)?;

        row.try_get("taken").map_err(map_infra_error)
    }

    async fn update_profile(
        &self,
        user_id: i64,
        username: &str,
        bio: Option<&str>,
        avatar: Option<&str>,
    ) -> Result<bool, ProfileDomainError> {
        let statement = r#"
            UPDATE users
            SET username = $1,
                bio = $2,
                avatar = COALESCE($3, avatar),
                updated_at = NOW()
            WHERE id = $4
        "#;

        let result = sqlx::query(statement)
            .bind(username)
            .bind(bio)
            .bind(avatar)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_password_hash(&self, user_id: i64) -> Result<Option<String>, ProfileDomainError> {
        let row = sqlx::query("SELECT password_hash FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        row.map(|row| row.try_get("password_hash").map_err(map_infra_error))
            .transpose()
    }

    async fn update_password_hash(
        &self,
        user_id: i64,
        password_hash: &str,
    ) -> Result<bool, ProfileDomainError> {
        let result =
            sqlx::query("UPDATE users SET password_hash = $1, updated_at = NOW() WHERE id = $2")
                .bind(password_hash)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_avatar(&self, user_id: i64, avatar: &str) -> Result<bool, ProfileDomainError> {
        let result = sqlx::query("UPDATE users SET avatar = $1, updated_at = NOW() WHERE id = $2")
            .bind(avatar)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_infra_error(error: sqlx::Error) -> ProfileDomainError {
    ProfileDomainError::InfrastructureError(error.to_string())
}
