use super::*;

fn ok(id: &str) -> NodeOutcome {
    NodeOutcome {
        node_id: id.to_owned(),
        node_name: format!("orderer-{id}"),
        error: None,
    }
}

fn failed(id: &str, error: &str) -> NodeOutcome {
    NodeOutcome {
        node_id: id.to_owned(),
        node_name: format!("orderer-{id}"),
        error: Some(error.to_owned()),
    }
}

#[test]
fn outcome_from_response_keeps_error_text() {
    let osn = Osn {
        id: "o1".to_owned(),
        name: "orderer-o1".to_owned(),
        msp_id: None,
    };

    let outcome = NodeOutcome::from_response(
        &osn,
        UnjoinResponse { error: Some("cannot remove: system channel exists".to_owned()) },
    );
    assert_eq!(outcome.node_id, "o1");
    assert_eq!(outcome.error.as_deref(), Some("cannot remove: system channel exists"));
    assert!(!outcome.is_success());

    let outcome = NodeOutcome::from_response(&osn, UnjoinResponse::default());
    assert!(outcome.is_success());
}

#[test]
fn failure_summary_none_when_all_succeed() {
    assert_eq!(failure_summary(&[]), None);
    assert_eq!(failure_summary(&[ok("o1"), ok("o2")]), None);
}

#[test]
fn failure_summary_single_error_is_verbatim() {
    let outcomes = [ok("o1"), failed("o2", "cannot remove: channel does not exist")];
    assert_eq!(
        failure_summary(&outcomes).as_deref(),
        Some("cannot remove: channel does not exist")
    );
}

#[test]
fn failure_summary_joins_distinct_errors() {
    let outcomes = [
        failed("o1", "cannot remove: system channel exists"),
        failed("o2", "cannot remove: channel does not exist"),
    ];
    assert_eq!(
        failure_summary(&outcomes).as_deref(),
        Some("cannot remove: system channel exists; cannot remove: channel does not exist")
    );
}

#[test]
fn failure_summary_dedupes_repeated_errors() {
    let outcomes = [
        failed("o1", "cannot remove: channel does not exist"),
        failed("o2", "cannot remove: channel does not exist"),
    ];
    assert_eq!(
        failure_summary(&outcomes).as_deref(),
        Some("cannot remove: channel does not exist")
    );
}
