use super::*;
use std::collections::HashMap;

fn channel(name: &str, node_ids: &[&str]) -> ChannelInfo {
    let mut nodes = HashMap::new();
    for id in node_ids {
        nodes.insert(
            (*id).to_owned(),
            Osn {
                id: (*id).to_owned(),
                name: format!("orderer-{id}"),
                msp_id: Some("OrdererMSP".to_owned()),
            },
        );
    }
    ChannelInfo { name: name.to_owned(), nodes }
}

fn outcome(id: &str, error: Option<&str>) -> NodeOutcome {
    NodeOutcome {
        node_id: id.to_owned(),
        node_name: format!("orderer-{id}"),
        error: error.map(ToOwned::to_owned),
    }
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn from_channel_selects_every_node() {
    let form = UnjoinForm::from_channel(&channel("ch1", &["o1", "o2"]));

    assert_eq!(form.selected.len(), 2);
    assert!(form.is_selected("o1"));
    assert!(form.is_selected("o2"));
    assert!(!form.selection_missing());
    assert!(form.confirmation_mismatch());
    assert_eq!(form.status, UnjoinStatus::ConfirmationMismatch);
    assert!(form.error().is_none());
}

#[test]
fn from_channel_without_nodes_reports_missing_selection() {
    let form = UnjoinForm::from_channel(&channel("ch1", &[]));

    assert!(form.selection_missing());
    assert_eq!(form.status, UnjoinStatus::MissingSelection);
}

#[test]
fn from_channel_orders_selection_by_node_name() {
    let form = UnjoinForm::from_channel(&channel("ch1", &["o3", "o1", "o2"]));
    let names: Vec<&str> = form.selected.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["orderer-o1", "orderer-o2", "orderer-o3"]);
}

// =============================================================
// Field validation
// =============================================================

#[test]
fn deselecting_all_nodes_blocks_submit() {
    let mut form = UnjoinForm::from_channel(&channel("ch1", &["o1", "o2"]));
    form.set_confirm_text("ch1".to_owned());
    assert!(form.can_submit());

    form.set_selection(Vec::new());
    assert!(form.selection_missing());
    assert_eq!(form.status, UnjoinStatus::MissingSelection);
    assert!(!form.can_submit());
}

#[test]
fn confirmation_must_match_exactly() {
    let mut form = UnjoinForm::from_channel(&channel("ch1", &["o1"]));

    form.set_confirm_text("ch2".to_owned());
    assert!(form.confirmation_mismatch());

    form.set_confirm_text("Ch1".to_owned());
    assert!(form.confirmation_mismatch());

    form.set_confirm_text("ch1 ".to_owned());
    assert!(form.confirmation_mismatch());

    form.set_confirm_text("ch1".to_owned());
    assert!(!form.confirmation_mismatch());
    assert_eq!(form.status, UnjoinStatus::Ready);
}

#[test]
fn can_submit_matches_guard_combination() {
    for (select_any, confirm_match) in [(false, false), (false, true), (true, false), (true, true)] {
        let mut form = UnjoinForm::from_channel(&channel("ch1", &["o1", "o2"]));
        if !select_any {
            form.set_selection(Vec::new());
        }
        form.set_confirm_text(if confirm_match { "ch1" } else { "ch2" }.to_owned());

        assert_eq!(form.selection_missing(), !select_any);
        assert_eq!(form.confirmation_mismatch(), !confirm_match);
        assert_eq!(
            form.can_submit(),
            select_any && confirm_match,
            "select_any={select_any} confirm_match={confirm_match}"
        );
    }
}

#[test]
fn toggle_node_removes_and_restores() {
    let info = channel("ch1", &["o1", "o2"]);
    let mut form = UnjoinForm::from_channel(&info);
    let o1 = info.nodes["o1"].clone();

    form.toggle_node(&o1);
    assert!(!form.is_selected("o1"));
    assert!(form.is_selected("o2"));

    form.toggle_node(&o1);
    assert!(form.is_selected("o1"));
    assert_eq!(form.selected.len(), 2);
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn begin_submit_requires_ready() {
    let mut form = UnjoinForm::from_channel(&channel("ch1", &["o1"]));
    assert!(!form.begin_submit());
    assert_eq!(form.status, UnjoinStatus::ConfirmationMismatch);

    form.set_confirm_text("ch1".to_owned());
    assert!(form.begin_submit());
    assert_eq!(form.status, UnjoinStatus::Submitting);

    // A second submit cannot start while one is in flight.
    assert!(!form.begin_submit());
}

#[test]
fn edits_during_submit_do_not_mask_it() {
    let mut form = UnjoinForm::from_channel(&channel("ch1", &["o1"]));
    form.set_confirm_text("ch1".to_owned());
    assert!(form.begin_submit());

    form.set_confirm_text("ch2".to_owned());
    assert_eq!(form.status, UnjoinStatus::Submitting);
}

#[test]
fn finish_submit_single_error_is_surfaced_verbatim() {
    let mut form = UnjoinForm::from_channel(&channel("ch1", &["o1", "o2"]));
    form.set_confirm_text("ch1".to_owned());
    assert!(form.begin_submit());

    form.finish_submit(vec![
        outcome("o1", None),
        outcome("o2", Some("cannot remove: channel does not exist")),
    ]);

    assert_eq!(form.error(), Some("cannot remove: channel does not exist"));
    assert_eq!(form.outcomes.len(), 2);
    assert!(!form.can_submit());
}

#[test]
fn finish_submit_all_ok_succeeds() {
    let mut form = UnjoinForm::from_channel(&channel("ch1", &["o1", "o2"]));
    form.set_confirm_text("ch1".to_owned());
    assert!(form.begin_submit());

    form.finish_submit(vec![outcome("o1", None), outcome("o2", None)]);

    assert_eq!(form.status, UnjoinStatus::Succeeded);
    assert!(form.error().is_none());
}

#[test]
fn fail_submit_surfaces_identity_error() {
    let mut form = UnjoinForm::from_channel(&channel("ch1", &["o1"]));
    form.set_confirm_text("ch1".to_owned());
    assert!(form.begin_submit());

    form.fail_submit("identity request failed: 503".to_owned());

    assert_eq!(form.error(), Some("identity request failed: 503"));
    assert!(form.outcomes.is_empty());
}

#[test]
fn failed_form_revalidates_on_next_edit() {
    let mut form = UnjoinForm::from_channel(&channel("ch1", &["o1"]));
    form.set_confirm_text("ch1".to_owned());
    assert!(form.begin_submit());
    form.fail_submit("cannot remove: system channel exists".to_owned());

    form.set_confirm_text("ch1".to_owned());
    assert_eq!(form.status, UnjoinStatus::Ready);
    assert!(form.error().is_none());
}
