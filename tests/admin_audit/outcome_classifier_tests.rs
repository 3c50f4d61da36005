use blog_audit_api::admin_audit::domain::{
    model::enums::{
        admin_audit_mode::AdminAuditMode, admin_audit_outcome::AdminAuditOutcome,
        admin_audit_severity::AdminAuditSeverity,
    },
    services::admin_action_outcome_classifier::{
        GENERIC_FAILURE_SUMMARY, HandlerTermination, INCOMPLETE_RESPONSE_SUMMARY, classify,
    },
};

#[test]
fn success_statuses_are_successes_at_info() {
    for status in [200, 201, 204, 302] {
        let classified = classify(&HandlerTermination::responded(status), AdminAuditMode::Detailed);

        assert_eq!(classified.outcome(), AdminAuditOutcome::Success, "status {status}");
        assert_eq!(classified.severity(), AdminAuditSeverity::Info);
        assert_eq!(classified.error_detail(), None);
    }
}

#[test]
fn client_and_server_errors_are_failures_with_status_summary() {
    let classified = classify(&HandlerTermination::responded(404), AdminAuditMode::Detailed);

    assert_eq!(classified.outcome(), AdminAuditOutcome::Failure);
    assert_eq!(classified.severity(), AdminAuditSeverity::Warning);
    assert_eq!(classified.error_detail(), Some("request failed (status 404)"));
}

#[test]
fn informational_status_is_not_a_success() {
    let classified = classify(&HandlerTermination::responded(101), AdminAuditMode::Detailed);

    assert_eq!(classified.outcome(), AdminAuditOutcome::Failure);
}

#[test]
fn declared_error_becomes_the_failure_summary() {
    let termination = HandlerTermination::Responded {
        status: 409,
        declared_success: None,
        declared_error: Some("username already in use".to_string()),
    };

    let classified = classify(&termination, AdminAuditMode::Detailed);

    assert_eq!(classified.error_detail(), Some("username already in use"));
}

#[test]
fn blank_declared_error_falls_back_to_status_summary() {
    let termination = HandlerTermination::Responded {
        status: 500,
        declared_success: None,
        declared_error: Some("   ".to_string()),
    };

    let classified = classify(&termination, AdminAuditMode::Detailed);

    assert_eq!(classified.error_detail(), Some("request failed (status 500)"));
}

#[test]
fn ok_status_declaring_success_false_is_a_failure() {
    let termination = HandlerTermination::Responded {
        status: 200,
        declared_success: Some(false),
        declared_error: Some("nothing to publish".to_string()),
    };

    let classified = classify(&termination, AdminAuditMode::Detailed);

    assert_eq!(classified.outcome(), AdminAuditOutcome::Failure);
    assert_eq!(classified.error_detail(), Some("nothing to publish"));
}

#[test]
fn security_mode_raises_failure_severity_to_error() {
    let classified = classify(&HandlerTermination::responded(400), AdminAuditMode::Security);

    assert_eq!(classified.severity(), AdminAuditSeverity::Error);

    let success = classify(&HandlerTermination::responded(200), AdminAuditMode::Security);
    assert_eq!(success.severity(), AdminAuditSeverity::Info);
}

#[test]
fn panic_uses_its_message_or_the_generic_summary() {
    let with_message = classify(
        &HandlerTermination::Panicked {
            message: Some("storage exploded".to_string()),
        },
        AdminAuditMode::Detailed,
    );
    let without_message = classify(
        &HandlerTermination::Panicked { message: None },
        AdminAuditMode::Detailed,
    );

    assert_eq!(with_message.error_detail(), Some("storage exploded"));
    assert_eq!(without_message.error_detail(), Some(GENERIC_FAILURE_SUMMARY));
    assert_eq!(without_message.outcome(), AdminAuditOutcome::Failure);
}

#[test]
fn incomplete_response_is_a_failure() {
    let classified = classify(&HandlerTermination::Incomplete, AdminAuditMode::Detailed);

    assert_eq!(classified.outcome(), AdminAuditOutcome::Failure);
    assert_eq!(classified.error_detail(), Some(INCOMPLETE_RESPONSE_SUMMARY));
}
