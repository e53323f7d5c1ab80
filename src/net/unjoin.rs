//! Concurrent unjoin fan-out and result aggregation.
//!
//! The identity set is fetched once; every selected node then gets its own
//! unjoin request. The requests run concurrently and all completions are
//! awaited before anything is reported, so callers see one aggregated
//! result instead of racing per-node updates.

#[cfg(test)]
#[path = "unjoin_test.rs"]
mod unjoin_test;

use super::types::{Osn, UnjoinResponse};

/// Outcome of one node's unjoin request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeOutcome {
    pub node_id: String,
    pub node_name: String,
    pub error: Option<String>,
}

impl NodeOutcome {
    /// Pair a node with the response its unjoin request produced.
    pub fn from_response(osn: &Osn, resp: UnjoinResponse) -> Self {
        Self {
            node_id: osn.id.clone(),
            node_name: osn.name.clone(),
            error: resp.error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Join the distinct error strings of failed outcomes with `"; "`.
///
/// Returns `None` when every outcome succeeded. A single failure surfaces
/// its backend error text verbatim.
pub fn failure_summary(outcomes: &[NodeOutcome]) -> Option<String> {
    let mut errors: Vec<&str> = Vec::new();
    for outcome in outcomes {
        if let Some(err) = outcome.error.as_deref() {
            if !errors.contains(&err) {
                errors.push(err);
            }
        }
    }

    if errors.is_empty() {
        None
    } else {
        Some(errors.join("; "))
    }
}

/// Fetch the identity set once, then unjoin `channel_name` on every node in
/// `nodes` concurrently, awaiting every completion.
///
/// # Errors
///
/// Returns an error string when the identity fetch fails; per-node failures
/// are reported through the returned outcomes instead.
pub async fn unjoin_channel_nodes(
    channel_name: &str,
    nodes: &[Osn],
) -> Result<Vec<NodeOutcome>, String> {
    #[cfg(feature = "hydrate")]
    {
        let identities = super::api::fetch_identities().await?;
        let identities = &identities;

        let requests = nodes.iter().map(|osn| async move {
            let resp = super::api::unjoin_channel(identities, osn, channel_name).await;
            NodeOutcome::from_response(osn, resp)
        });

        Ok(futures::future::join_all(requests).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (channel_name, nodes);
        Err("not available on server".to_owned())
    }
}
