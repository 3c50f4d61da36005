use std::sync::Arc;

use async_trait::async_trait;

use crate::profile::{
    domain::{
        model::{
            commands::{
                change_password_command::ChangePasswordCommand,
                update_avatar_command::UpdateAvatarCommand,
                update_profile_command::UpdateProfileCommand,
            },
            enums::profile_domain_error::ProfileDomainError,
        },
        services::{
            credential_hasher::CredentialHasher, profile_command_service::ProfileCommandService,
        },
    },
    infrastructure::persistence::repositories::user_profile_repository::UserProfileRepository,
};

pub struct ProfileCommandServiceImpl {
    repository: Arc<dyn UserProfileRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl ProfileCommandServiceImpl {
    pub fn new(
        repository: Arc<dyn UserProfileRepository>,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl ProfileCommandService for ProfileCommandServiceImpl {
    async fn handle_update_profile(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<(), ProfileDomainError> {
        let username = command.username().value();

        if self
            .repository
            .is_username_taken_by_other(username, command.user_id())
            .await?
        {
            return Err(ProfileDomainError::UsernameTaken);
        }

        let updated = self
            .repository
            .update_profile(command.user_id(), username, command.bio(), command.avatar())
            .await?;

        if !updated {
            return Err(ProfileDomainError::UserNotFound);
        }

        Ok(())
    }

    async fn handle_change_password(
        &self,
        command: ChangePasswordCommand,
    ) -> Result<(), ProfileDomainError> {
        let stored_hash = self
            .repository
            .find_password_hash(command.user_id())
            .await?
            .ok_or(ProfileDomainError::UserNotFound)?;

        let hasher = self.hasher.clone();
        let current_password = command.current_password().to_string();
        let new_password = command.new_password().to_string();

        // Hashing is CPU bound and must stay off the async workers.
        let rehash = move || -> Result<Option<String>, ProfileDomainError> {
            if !hasher.verify(&current_password, &stored_hash)? {
                return Ok(None);
            }
            hasher.hash(&new_password).map(Some)
        };

        let new_hash = tokio::task::spawn_blocking(rehash)
            .await
            .map_err(|e| ProfileDomainError::InfrastructureError(e.to_string()))??
            .ok_or(ProfileDomainError::CurrentPasswordIncorrect)?;

        if !self
            .repository
            .update_password_hash(command.user_id(), &new_hash)
            .await?
        {
            return Err(ProfileDomainError::UserNotFound);
        }

        Ok(())
    }

    async fn handle_update_avatar(
        &self,
        command: UpdateAvatarCommand,
    ) -> Result<(), ProfileDomainError> {
        if !self
            .repository
            .update_avatar(command.user_id(), command.avatar())
            .await?
        {
            return Err(ProfileDomainError::UserNotFound);
        }

        Ok(())
    }
}
