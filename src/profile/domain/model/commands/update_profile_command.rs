use crate::profile::domain::model::{
    enums::profile_domain_error::ProfileDomainError,
    value_objects::profile_username::ProfileUsername,
};

#[derive(Clone, Debug)]
pub struct UpdateProfileCommand {
    user_id: i64,
    username: ProfileUsername,
    bio: Option<String>,
    avatar: Option<String>,
}

impl UpdateProfileCommand {
    pub fn new(
        user_id: i64,
        username: Option<String>,
        bio: Option<String>,
        avatar: Option<String>,
    ) -> Result<Self, ProfileDomainError> {
        Ok(Self {
            user_id,
            username: ProfileUsername::new(username)?,
            bio,
            avatar,
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn username(&self) -> &ProfileUsername {
        &self.username
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}
