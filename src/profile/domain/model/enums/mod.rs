pub mod profile_domain_error;
