pub mod change_password_command;
pub mod update_avatar_command;
pub mod update_profile_command;
