use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileDomainError {
    #[error("username is required")]
    UsernameRequired,

    #[error("username is invalid; use 3..50 letters, digits, '_' or '-'")]
    InvalidUsername,

    #[error("username is already in use")]
    UsernameTaken,

    #[error("current password and new password are required")]
    PasswordsRequired,

    #[error("new password must be at least 6 characters")]
    NewPasswordTooShort,

    #[error("current password is incorrect")]
    CurrentPasswordIncorrect,

    #[error("avatar is required")]
    AvatarRequired,

    #[error("user not found")]
    UserNotFound,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
