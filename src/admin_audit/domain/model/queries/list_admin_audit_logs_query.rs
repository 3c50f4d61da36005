use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::admin_audit::domain::model::{
    enums::{
        admin_audit_domain_error::AdminAuditDomainError, admin_audit_outcome::AdminAuditOutcome,
    },
    value_objects::{audit_action_name::AuditActionName, audit_resource_name::AuditResourceName},
};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug)]
pub struct ListAdminAuditLogsQuery {
    actor_id: Option<i64>,
    action: Option<AuditActionName>,
    resource: Option<AuditResourceName>,
    outcome: Option<AdminAuditOutcome>,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    page: u32,
    page_size: u32,
}

#[derive(Default)]
pub struct ListAdminAuditLogsQueryParts {
    pub actor_id: Option<i64>,
    pub action: Option<String>,
    pub resource: Option<String>,
    pub outcome: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListAdminAuditLogsQuery {
    pub fn new(parts: ListAdminAuditLogsQueryParts) -> Result<Self, AdminAuditDomainError> {
        let page = parts.page.unwrap_or(1);
        let page_size = parts.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page == 0 || page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(AdminAuditDomainError::InvalidPagination);
        }

        if let (Some(from), Some(to)) = (parts.from, parts.to) {
            if from > to {
                return Err(AdminAuditDomainError::InvalidTimeWindow);
            }
        }

        let outcome = parts
            .outcome
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| {
                AdminAuditOutcome::from_str(raw.trim())
                    .map_err(|_| AdminAuditDomainError::InvalidOutcome)
            })
            .transpose()?;

        Ok(Self {
            actor_id: parts.actor_id,
            action: parts
                .action
                .filter(|raw| !raw.trim().is_empty())
                .map(AuditActionName::new)
                .transpose()?,
            resource: parts
                .resource
                .filter(|raw| !raw.trim().is_empty())
                .map(AuditResourceName::new)
                .transpose()?,
            outcome,
            from: parts.from,
            to: parts.to,
            page,
            page_size,
        })
    }

    pub fn actor_id(&self) -> Option<i64> {
        self.actor_id
    }
    pub fn action(&self) -> Option<&AuditActionName> {
        self.action.as_ref()
    }
    pub fn resource(&self) -> Option<&AuditResourceName> {
        self.resource.as_ref()
    }
    pub fn outcome(&self) -> Option<AdminAuditOutcome> {
        self.outcome
    }
    pub fn from(&self) -> Option<DateTime<Utc>> {
        self.from
    }
    pub fn to(&self) -> Option<DateTime<Utc>> {
        self.to
    }
    pub fn page(&self) -> u32 {
        self.page
    }
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}
