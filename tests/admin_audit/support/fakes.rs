use std::{
    sync::Mutex,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use blog_audit_api::{
    admin_audit::{
        domain::model::{
            entities::admin_audit_log_entry::AdminAuditLogEntry,
            enums::admin_audit_domain_error::AdminAuditDomainError,
            events::admin_action_audited_event::AdminActionAuditedEvent,
        },
        infrastructure::persistence::repositories::admin_audit_log_repository::{
            AdminAuditLogCriteria, AdminAuditLogListing, AdminAuditLogRepository,
        },
    },
    iam_integration::{
        domain::model::value_objects::authenticated_user_id::AuthenticatedUserId,
        interfaces::acl::iam_authentication_facade::{
            IamAuthenticationFacade, IamIntegrationError, VerifiedUserContext,
        },
    },
};

#[derive(Default)]
struct FakeAdminAuditLogRepositoryState {
    saved: Vec<(i64, AdminActionAuditedEvent)>,
    save_attempts: usize,
}

pub struct FakeAdminAuditLogRepository {
    state: Mutex<FakeAdminAuditLogRepositoryState>,
    save_should_fail: bool,
    save_delay: Option<Duration>,
}

impl FakeAdminAuditLogRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeAdminAuditLogRepositoryState::default()),
            save_should_fail: false,
            save_delay: None,
        }
    }

    pub fn failing() -> Self {
        Self {
            save_should_fail: true,
            ..Self::new()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            save_delay: Some(delay),
            ..Self::new()
        }
    }

    pub fn saved_events(&self) -> Vec<AdminActionAuditedEvent> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .saved
            .iter()
            .map(|(_, event)| event.clone())
            .collect()
    }

    pub fn save_attempts(&self) -> usize {
        self.state.lock().expect("mutex poisoned").save_attempts
    }

    /// Polls until `count` save attempts happened or `timeout` elapsed.
    pub async fn wait_for_attempts(&self, count: usize, timeout: Duration) -> usize {
        let started = Instant::now();
        loop {
            let attempts = self.save_attempts();
            if attempts >= count || started.elapsed() >= timeout {
                return attempts;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    /// Polls until `count` events are stored or `timeout` elapsed.
    pub async fn wait_for_saved(
        &self,
        count: usize,
        timeout: Duration,
    ) -> Vec<AdminActionAuditedEvent> {
        let started = Instant::now();
        loop {
            let saved = self.saved_events();
            if saved.len() >= count || started.elapsed() >= timeout {
                return saved;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}

#[async_trait]
impl AdminAuditLogRepository for FakeAdminAuditLogRepository {
    async fn save_event(
        &self,
        event: &AdminActionAuditedEvent,
    ) -> Result<i64, AdminAuditDomainError> {
        if let Some(delay) = self.save_delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.state.lock().expect("mutex poisoned");
        state.save_attempts += 1;

        if self.save_should_fail {
            return Err(AdminAuditDomainError::StoreUnavailable(
                "connection refused".to_string(),
            ));
        }

        let id = state.saved.len() as i64 + 1;
        state.saved.push((id, event.clone()));
        Ok(id)
    }

    async fn list(
        &self,
        criteria: &AdminAuditLogCriteria,
    ) -> Result<AdminAuditLogListing, AdminAuditDomainError> {
        let state = self.state.lock().expect("mutex poisoned");

        let mut matching: Vec<AdminAuditLogEntry> = state
            .saved
            .iter()
            .filter(|(_, event)| {
                criteria.actor_id.is_none_or(|id| event.actor_id() == Some(id))
                    && criteria
                        .action
                        .as_deref()
                        .is_none_or(|action| event.action().value() == action)
                    && criteria
                        .resource
                        .as_deref()
                        .is_none_or(|resource| event.resource().value() == resource)
                    && criteria.outcome.is_none_or(|outcome| event.outcome() == outcome)
                    && criteria.from.is_none_or(|from| event.occurred_at() >= from)
                    && criteria.to.is_none_or(|to| event.occurred_at() <= to)
            })
            .map(|(id, event)| to_entry(*id, event))
            .collect();

        matching.sort_by(|a, b| b.id.cmp(&a.id));
        let total = matching.len() as u64;

        let entries = matching
            .into_iter()
            .skip(criteria.offset as usize)
            .take(criteria.limit as usize)
            .collect();

        Ok(AdminAuditLogListing { entries, total })
    }
}

fn to_entry(id: i64, event: &AdminActionAuditedEvent) -> AdminAuditLogEntry {
    AdminAuditLogEntry {
        id,
        actor_id: event.actor_id(),
        actor_username: event.actor_id().map(|id| format!("user{id}")),
        action: event.action().value().to_string(),
        resource: event.resource().value().to_string(),
        resource_id: event.resource_id().map(str::to_string),
        details: event.details().cloned(),
        source_address: event.source_address().to_string(),
        client_agent: event.client_agent().to_string(),
        outcome: event.outcome(),
        severity: event.severity(),
        error_detail: event.error_detail().map(str::to_string),
        recorded_at: event.occurred_at(),
    }
}

/// Accepts `user-<id>` and `admin-<id>` bearer tokens.
pub struct FakeIamAuthenticationFacade;

#[async_trait]
impl IamAuthenticationFacade for FakeIamAuthenticationFacade {
    async fn verify_access_token(
        &self,
        access_token: &str,
    ) -> Result<VerifiedUserContext, IamIntegrationError> {
        let (role, raw_id) = access_token
            .split_once('-')
            .ok_or_else(|| IamIntegrationError::InvalidToken("malformed".to_string()))?;

        if role != "user" && role != "admin" {
            return Err(IamIntegrationError::InvalidToken("unknown role".to_string()));
        }

        let subject_id = AuthenticatedUserId::new(raw_id)
            .map_err(IamIntegrationError::InvalidToken)?;

        Ok(VerifiedUserContext {
            subject_id,
            role: role.to_string(),
            exp_epoch_seconds: u64::MAX,
        })
    }
}
