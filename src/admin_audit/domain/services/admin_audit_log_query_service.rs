use async_trait::async_trait;

use crate::admin_audit::domain::model::{
    entities::admin_audit_log_page::AdminAuditLogPage,
    enums::admin_audit_domain_error::AdminAuditDomainError,
    queries::list_admin_audit_logs_query::ListAdminAuditLogsQuery,
};

#[async_trait]
pub trait AdminAuditLogQueryService: Send + Sync {
    async fn handle_list(
        &self,
        query: ListAdminAuditLogsQuery,
    ) -> Result<AdminAuditLogPage, AdminAuditDomainError>;
}
