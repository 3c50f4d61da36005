pub mod profile_username;
