use crate::profile::domain::model::enums::profile_domain_error::ProfileDomainError;

#[derive(Clone, Debug)]
pub struct UpdateAvatarCommand {
    user_id: i64,
    avatar: String,
}

impl UpdateAvatarCommand {
    pub fn new(user_id: i64, avatar: Option<String>) -> Result<Self, ProfileDomainError> {
        let avatar = avatar
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ProfileDomainError::AvatarRequired)?;

        Ok(Self { user_id, avatar })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }
}
