pub mod sqlx_user_profile_repository_impl;
