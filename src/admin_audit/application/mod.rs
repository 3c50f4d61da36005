pub mod dispatchers;
pub mod event_builders;
pub mod query_services;
