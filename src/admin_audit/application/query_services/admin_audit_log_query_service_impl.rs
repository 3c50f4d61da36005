use std::sync::Arc;

use async_trait::async_trait;

use crate::admin_audit::{
    domain::{
        model::{
            entities::admin_audit_log_page::AdminAuditLogPage,
            enums::admin_audit_domain_error::AdminAuditDomainError,
            queries::list_admin_audit_logs_query::ListAdminAuditLogsQuery,
        },
        services::admin_audit_log_query_service::AdminAuditLogQueryService,
    },
    infrastructure::persistence::repositories::admin_audit_log_repository::{
        AdminAuditLogCriteria, AdminAuditLogRepository,
    },
};

pub struct AdminAuditLogQueryServiceImpl {
    repository: Arc<dyn AdminAuditLogRepository>,
}

impl AdminAuditLogQueryServiceImpl {
    pub fn new(repository: Arc<dyn AdminAuditLogRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AdminAuditLogQueryService for AdminAuditLogQueryServiceImpl {
    async fn handle_list(
        &self,
        query: ListAdminAuditLogsQuery,
    ) -> Result<AdminAuditLogPage, AdminAuditDomainError> {
        let criteria = AdminAuditLogCriteria {
            actor_id: query.actor_id(),
            action: query.action().map(|action| action.value().to_string()),
            resource: query.resource().map(|resource| resource.value().to_string()),
            outcome: query.outcome(),
            from: query.from(),
            to: query.to(),
            limit: u64::from(query.page_size()),
            offset: query.offset(),
        };

        let listing = self.repository.list(&criteria).await?;

        Ok(AdminAuditLogPage::new(
            listing.entries,
            listing.total,
            query.page(),
            query.page_size(),
        ))
    }
}
