use regex::Regex;

lazy_static::lazy_static! {
    static ref AUDIT_TOKEN_REGEX: Regex = Regex::new("^[a-z][a-z0-9_]{0,63}$").expect("valid regex");
}

pub(crate) fn normalize_audit_token(value: &str) -> Option<String> {
    let normalized = value.trim().to_lowercase();

    if AUDIT_TOKEN_REGEX.is_match(&normalized) {
        Some(normalized)
    } else {
        None
    }
}
