use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProfileMutationResponseResource {
    pub success: bool,
    pub message: String,
}

impl ProfileMutationResponseResource {
    pub fn succeeded(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}
