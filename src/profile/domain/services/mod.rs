pub mod credential_hasher;
pub mod profile_command_service;
