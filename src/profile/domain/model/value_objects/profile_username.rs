use regex::Regex;

use crate::profile::domain::model::enums::profile_domain_error::ProfileDomainError;

lazy_static::lazy_static! {
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[\p{L}\p{N}_-]{3,50}$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ProfileUsername(String);

impl ProfileUsername {
    pub fn new(value: Option<String>) -> Result<Self, ProfileDomainError> {
        let trimmed = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ProfileDomainError::UsernameRequired)?;

        if !USERNAME_REGEX.is_match(&trimmed) {
            return Err(ProfileDomainError::InvalidUsername);
        }

        Ok(Self(trimmed))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
