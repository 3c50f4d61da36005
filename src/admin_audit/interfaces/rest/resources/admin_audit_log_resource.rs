use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AdminAuditLogResource {
    pub id: i64,
    pub actor_id: Option<i64>,
    pub actor_username: Option<String>,
    pub action: String,
    pub resource: String,
    pub resource_id: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
    pub source_address: String,
    pub client_agent: String,
    pub outcome: String,
    pub severity: String,
    pub error_detail: Option<String>,
    pub recorded_at: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AdminAuditLogPageResource {
    pub logs: Vec<AdminAuditLogResource>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
}
