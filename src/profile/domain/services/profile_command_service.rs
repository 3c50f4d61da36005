use async_trait::async_trait;

use crate::profile::domain::model::{
    commands::{
        change_password_command::ChangePasswordCommand,
        update_avatar_command::UpdateAvatarCommand,
        update_profile_command::UpdateProfileCommand,
    },
    enums::profile_domain_error::ProfileDomainError,
};

#[async_trait]
pub trait ProfileCommandService: Send + Sync {
    async fn handle_update_profile(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<(), ProfileDomainError>;

    async fn handle_change_password(
        &self,
        command: ChangePasswordCommand,
    ) -> Result<(), ProfileDomainError>;

    async fn handle_update_avatar(
        &self,
        command: UpdateAvatarCommand,
    ) -> Result<(), ProfileDomainError>;
}
