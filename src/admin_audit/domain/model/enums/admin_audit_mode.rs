use crate::admin_audit::domain::model::enums::admin_audit_severity::AdminAuditSeverity;

const CREDENTIAL_KEY_FRAGMENTS: &[&str] = &[
    "password",
    "passwd",
    "token",
    "secret",
    "apikey",
    "credential",
];

const SECURITY_KEY_FRAGMENTS: &[&str] = &["hash", "authorization"];

/// Auditing tier selected per route.
///
/// `Detailed` covers ordinary business mutations. `Security` covers
/// credential or identity sensitive mutations and raises failures to
/// `error`. Both tiers remove credential-looking detail keys before the
/// entry is built; `Security` also removes hashes and authorization values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AdminAuditMode {
    Detailed,
    Security,
}

impl AdminAuditMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Detailed => "detailed",
            Self::Security => "security",
        }
    }

    pub fn success_severity(&self) -> AdminAuditSeverity {
        AdminAuditSeverity::Info
    }

    pub fn failure_severity(&self) -> AdminAuditSeverity {
        match self {
            Self::Detailed => AdminAuditSeverity::Warning,
            Self::Security => AdminAuditSeverity::Error,
        }
    }

    pub fn is_credential_key(&self, key: &str) -> bool {
        let normalized = normalize_key(key);

        let contains_any =
            |fragments: &[&str]| fragments.iter().any(|fragment| normalized.contains(fragment));

        match self {
            Self::Detailed => contains_any(CREDENTIAL_KEY_FRAGMENTS),
            Self::Security => {
                contains_any(CREDENTIAL_KEY_FRAGMENTS) || contains_any(SECURITY_KEY_FRAGMENTS)
            }
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
