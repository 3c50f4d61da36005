pub mod change_password_request_resource;
pub mod profile_mutation_response_resource;
pub mod update_avatar_request_resource;
pub mod update_profile_request_resource;
