use std::fmt;

use crate::profile::domain::model::enums::profile_domain_error::ProfileDomainError;

pub const MIN_NEW_PASSWORD_CHARS: usize = 6;

#[derive(Clone)]
pub struct ChangePasswordCommand {
    user_id: i64,
    current_password: String,
    new_password: String,
}

impl ChangePasswordCommand {
    pub fn new(
        user_id: i64,
        current_password: Option<String>,
        new_password: Option<String>,
    ) -> Result<Self, ProfileDomainError> {
        let (Some(current_password), Some(new_password)) = (
            current_password.filter(|v| !v.is_empty()),
            new_password.filter(|v| !v.is_empty()),
        ) else {
            return Err(ProfileDomainError::PasswordsRequired);
        };

        if new_password.chars().count() < MIN_NEW_PASSWORD_CHARS {
            return Err(ProfileDomainError::NewPasswordTooShort);
        }

        Ok(Self {
            user_id,
            current_password,
            new_password,
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

impl fmt::Debug for ChangePasswordCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordCommand")
            .field("user_id", &self.user_id)
            .field("current_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish()
    }
}
