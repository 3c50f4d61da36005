use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder, Row, types::Json};

use crate::admin_audit::{
    domain::model::{
        entities::admin_audit_log_entry::AdminAuditLogEntry,
        enums::{
            admin_audit_domain_error::AdminAuditDomainError,
            admin_audit_outcome::AdminAuditOutcome, admin_audit_severity::AdminAuditSeverity,
        },
        events::admin_action_audited_event::AdminActionAuditedEvent,
        value_objects::audit_details::AuditDetails,
    },
    infrastructure::persistence::repositories::admin_audit_log_repository::{
        AdminAuditLogCriteria, AdminAuditLogListing, AdminAuditLogRepository,
    },
};

const SELECT_COLUMNS: &str = r#"
    SELECT l.id, l.actor_id, u.username AS actor_username, l.action, l.resource,
           l.resource_id, l.details, l.source_address, l.client_agent, l.outcome,
           l.severity, l.error_detail, l.recorded_at
    FROM admin_audit_logs l
    LEFT JOIN users u ON u.id = l.actor_id
"#;

pub struct SqlxAdminAuditLogRepositoryImpl {
    pool: PgPool,
}

impl SqlxAdminAuditLogRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, criteria: &AdminAuditLogCriteria) {
        builder.push(" WHERE TRUE");

        if let Some(actor_id) = criteria.actor_id {
            builder.push(" AND l.actor_id = ");
            builder.push_bind(actor_id);
        }
        if let Some(action) = &criteria.action {
            builder.push(" AND l.action = ");
            builder.push_bind(action.clone());
        }
        if let Some(resource) = &criteria.resource {
            builder.push(" AND l.resource = ");
            builder.push_bind(resource.clone());
        }
        if let Some(outcome) = criteria.outcome {
            builder.push(" AND l.outcome = ");
            builder.push_bind(outcome.as_str());
        }
        if let Some(from) = criteria.from {
            builder.push(" AND l.recorded_at >= ");
            builder.push_bind(from);
        }
        if let Some(to) = criteria.to {
            builder.push(" AND l.recorded_at <= ");
            builder.push_bind(to);
        }
    }

    fn row_to_entry(row: sqlx::postgres::PgRow) -> Result<AdminAuditLogEntry, AdminAuditDomainError> {
        let outcome_raw: String = row.try_get("outcome").map_err(map_infra_error)?;
        let severity_raw: String = row.try_get("severity").map_err(map_infra_error)?;
        let details: Option<Json<AuditDetails>> = row.try_get("details").map_err(map_infra_error)?;
        let recorded_at: DateTime<Utc> = row.try_get("recorded_at").map_err(map_infra_error)?;

        let outcome = AdminAuditOutcome::from_str(&outcome_raw).map_err(|_| {
            AdminAuditDomainError::StoreUnavailable("unknown outcome stored".to_string())
        })?;
        let severity = AdminAuditSeverity::from_str(&severity_raw).map_err(|_| {
            AdminAuditDomainError::StoreUnavailable("unknown severity stored".to_string())
        })?;

        Ok(AdminAuditLogEntry {
            id: row.try_get("id").map_err(map_infra_error)?,
            actor_id: row.try_get("actor_id").map_err(map_infra_error)?,
            actor_username: row.try_get("actor_username").map_err(map_infra_error)?,
            action: row.try_get("action").map_err(map_infra_error)?,
            resource: row.try_get("resource").map_err(map_infra_error)?,
            resource_id: row.try_get("resource_id").map_err(map_infra_error)?,
            details: details.map(|Json(details)| details),
            source_address: row.try_get("source_address").map_err(map_infra_error)?,
            client_agent: row.try_get("client_agent").map_err(map_infra_error)?,
            outcome,
            severity,
            error_detail: row.try_get("error_detail").map_err(map_infra_error)?,
            recorded_at,
        })
    }
}

#[async_trait]
impl AdminAuditLogRepository for SqlxAdminAuditLogRepositoryImpl {
    async fn save_event(
        &self,
        event: &AdminActionAuditedEvent,
    ) -> Result<i64, AdminAuditDomainError> {
        let statement = r#"
            INSERT INTO admin_audit_logs (
                actor_id,
                action,
                resource,
                resource_id,
                details,
                source_address,
                client_agent,
                outcome,
                severity,
                error_detail
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
        "#;

        let row = sqlx::query(statement)
            .bind(event.actor_id())
            .bind(event.action().value())
            .bind(event.resource().value())
            .bind(event.resource_id())
            .bind(event.details().map(Json))
            .bind(event.source_address())
            .bind(event.client_agent())
            .bind(event.outcome().as_str())
            .bind(event.severity().as_str())
            .bind(event.error_detail())
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?;

        row.try_get("id").map_err(map_infra_error)
    }

    async fn list(
        &self,
        criteria: &AdminAuditLogCriteria,
    ) -> Result<AdminAuditLogListing, AdminAuditDomainError> {
        let mut count_builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) AS total FROM admin_audit_logs l");
        Self::push_filters(&mut count_builder, criteria);

        let total: i64 = count_builder
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?
            .try_get("total")
            .map_err(map_infra_error)?;

        let mut builder = QueryBuilder::<Postgres>::new(SELECT_COLUMNS);
        Self::push_filters(&mut builder, criteria);
        builder.push(" ORDER BY l.recorded_at DESC, l.id DESC LIMIT ");
        builder.push_bind(i64::try_from(criteria.limit).unwrap_or(i64::MAX));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(criteria.offset).unwrap_or(i64::MAX));

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        let entries = rows
            .into_iter()
            .map(Self::row_to_entry)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AdminAuditLogListing {
            entries,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }
}

fn map_infra_error(error: sqlx::Error) -> AdminAuditDomainError {
    AdminAuditDomainError::StoreUnavailable(error.to_string())
}
