pub mod postgres;
pub mod user_profile_repository;
