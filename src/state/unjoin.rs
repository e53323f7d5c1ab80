#[cfg(test)]
#[path = "unjoin_test.rs"]
mod unjoin_test;

use crate::net::types::{ChannelInfo, Osn};
use crate::net::unjoin::{NodeOutcome, failure_summary};

/// Lifecycle of the unjoin form, from field validation through submission.
///
/// One tagged status replaces separate "node not selected" and
/// "confirmation mismatch" flags, so the form is always in exactly one
/// observable state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UnjoinStatus {
    /// No node is selected. Takes precedence over the confirmation check.
    #[default]
    MissingSelection,
    /// The typed confirmation does not equal the channel name.
    ConfirmationMismatch,
    /// Both guards pass; the unjoin action may be submitted.
    Ready,
    /// Requests are in flight; every node's response is still awaited.
    Submitting,
    /// At least one node reported an error, or the identity fetch failed.
    Failed(String),
    /// Every selected node unjoined the channel.
    Succeeded,
}

/// Form state backing the unjoin modal.
///
/// Holds the node selection, the typed confirmation, and the submission
/// status. All transitions are synchronous so the whole lifecycle can be
/// exercised in plain unit tests.
#[derive(Clone, Debug, Default)]
pub struct UnjoinForm {
    pub channel_name: String,
    pub selected: Vec<Osn>,
    pub confirm_text: String,
    pub status: UnjoinStatus,
    pub outcomes: Vec<NodeOutcome>,
}

impl UnjoinForm {
    /// Initialize from freshly fetched channel details: every node starts
    /// selected and the confirmation field starts empty, so a non-empty
    /// channel begins in `ConfirmationMismatch`.
    pub fn from_channel(info: &ChannelInfo) -> Self {
        let mut selected: Vec<Osn> = info.nodes.values().cloned().collect();
        selected.sort_by(|a, b| a.name.cmp(&b.name));

        let mut form = Self {
            channel_name: info.name.clone(),
            selected,
            ..Self::default()
        };
        form.revalidate();
        form
    }

    /// True when no node is selected.
    pub fn selection_missing(&self) -> bool {
        self.selected.is_empty()
    }

    /// True when the typed confirmation differs from the channel name.
    /// Comparison is exact; no trimming or case folding.
    pub fn confirmation_mismatch(&self) -> bool {
        self.confirm_text != self.channel_name
    }

    /// The unjoin action is available only in `Ready`.
    pub fn can_submit(&self) -> bool {
        self.status == UnjoinStatus::Ready
    }

    pub fn is_selected(&self, node_id: &str) -> bool {
        self.selected.iter().any(|osn| osn.id == node_id)
    }

    /// Toggle one node in or out of the selection.
    pub fn toggle_node(&mut self, osn: &Osn) {
        if let Some(pos) = self.selected.iter().position(|o| o.id == osn.id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(osn.clone());
        }
        self.revalidate();
    }

    /// Replace the whole selection.
    pub fn set_selection(&mut self, nodes: Vec<Osn>) {
        self.selected = nodes;
        self.revalidate();
    }

    /// Record a confirmation-field edit.
    pub fn set_confirm_text(&mut self, text: String) {
        self.confirm_text = text;
        self.revalidate();
    }

    /// Mark the fan-out as started. Returns `false` (and changes nothing)
    /// unless the form is `Ready`, which also blocks re-entrant submits.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.status = UnjoinStatus::Submitting;
        true
    }

    /// Record the aggregated fan-out result once every response has landed.
    pub fn finish_submit(&mut self, outcomes: Vec<NodeOutcome>) {
        self.status = match failure_summary(&outcomes) {
            Some(summary) => UnjoinStatus::Failed(summary),
            None => UnjoinStatus::Succeeded,
        };
        self.outcomes = outcomes;
    }

    /// Record an identity-fetch failure; no per-node outcomes exist.
    pub fn fail_submit(&mut self, reason: String) {
        self.status = UnjoinStatus::Failed(reason);
        self.outcomes = Vec::new();
    }

    /// Error text for the modal's error slot, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            UnjoinStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Recompute field validity. In-flight and succeeded submissions are
    /// left alone so edits cannot mask them; a failed submission returns to
    /// field validation on the next edit.
    fn revalidate(&mut self) {
        if matches!(self.status, UnjoinStatus::Submitting | UnjoinStatus::Succeeded) {
            return;
        }

        self.status = if self.selection_missing() {
            UnjoinStatus::MissingSelection
        } else if self.confirmation_mismatch() {
            UnjoinStatus::ConfirmationMismatch
        } else {
            UnjoinStatus::Ready
        };
    }
}
