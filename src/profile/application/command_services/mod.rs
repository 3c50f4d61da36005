pub mod profile_command_service_impl;
