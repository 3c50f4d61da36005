use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateAvatarRequestResource {
    #[validate(length(max = 2048))]
    pub avatar: Option<String>,
}
