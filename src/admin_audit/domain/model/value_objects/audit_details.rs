use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::admin_audit::domain::model::enums::{
    admin_audit_domain_error::AdminAuditDomainError, admin_audit_mode::AdminAuditMode,
};

const MAX_DETAIL_ENTRIES: usize = 64;
const MAX_TEXT_CHARS: usize = 1024;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuditDetailValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl AuditDetailValue {
    /// Objects and arrays have no primitive representation and yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::Null),
            Value::Bool(flag) => Some(Self::Bool(*flag)),
            Value::Number(number) => number
                .as_i64()
                .map(Self::Integer)
                .or_else(|| number.as_f64().map(Self::Float)),
            Value::String(text) => Some(Self::Text(truncate(text))),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl From<bool> for AuditDetailValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AuditDetailValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for AuditDetailValue {
    fn from(value: &str) -> Self {
        Self::Text(truncate(value))
    }
}

impl From<String> for AuditDetailValue {
    fn from(value: String) -> Self {
        Self::Text(truncate(&value))
    }
}

/// Handler or request supplied context attached to an audit entry: a flat
/// map of string keys to primitive values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditDetails(BTreeMap<String, AuditDetailValue>);

impl AuditDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict conversion used for handler attachments: the payload must be a
    /// JSON object whose every value is a primitive.
    pub fn from_json_object(value: &Value) -> Result<Self, AdminAuditDomainError> {
        let object = value.as_object().ok_or_else(|| {
            AdminAuditDomainError::DetailsSerialization(
                "details must be a JSON object".to_string(),
            )
        })?;

        let mut details = Self::new();
        for (key, raw) in object {
            let primitive = AuditDetailValue::from_json(raw).ok_or_else(|| {
                AdminAuditDomainError::DetailsSerialization(format!(
                    "details field `{key}` is not a primitive value"
                ))
            })?;
            details.insert(key.clone(), primitive);
        }

        Ok(details)
    }

    /// Lenient conversion used for captured request bodies: nested values
    /// are skipped, a non-object body yields an empty map.
    pub fn primitives_of(value: &Value) -> Self {
        let mut details = Self::new();

        if let Some(object) = value.as_object() {
            for (key, raw) in object {
                if let Some(primitive) = AuditDetailValue::from_json(raw) {
                    details.insert(key.clone(), primitive);
                }
            }
        }

        details
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AuditDetailValue>) {
        let key = key.into();
        if key.trim().is_empty() {
            return;
        }
        if self.0.len() >= MAX_DETAIL_ENTRIES && !self.0.contains_key(&key) {
            return;
        }
        self.0.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AuditDetailValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries of `overlay` replace entries of `self` with the same key.
    pub fn merged_with(mut self, overlay: AuditDetails) -> Self {
        for (key, value) in overlay.0 {
            self.insert(key, value);
        }
        self
    }

    pub fn scrubbed(mut self, mode: AdminAuditMode) -> Self {
        self.0.retain(|key, _| !mode.is_credential_key(key));
        self
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_TEXT_CHARS {
        text.to_string()
    } else {
        text.chars().take(MAX_TEXT_CHARS).collect()
    }
}
