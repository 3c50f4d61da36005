pub mod admin_audit;
pub mod config;
pub mod iam_integration;
pub mod profile;
pub mod shared;
