use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequestResource {
    #[validate(length(max = 128))]
    pub current_password: Option<String>,

    #[validate(length(max = 128))]
    pub new_password: Option<String>,
}
