//! Wire types shared with the console backend.

use std::collections::HashMap;

/// One ordering-service node (OSN) as the backend describes it.
///
/// The console treats this as an opaque selectable record; only `id` is
/// assumed unique.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Osn {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub msp_id: Option<String>,
}

/// Channel details including the nodes participating in it.
///
/// The node map is keyed by node id; its iteration order carries no meaning.
/// A backend that omits `nodes` decodes to an empty map.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChannelInfo {
    pub name: String,
    #[serde(default)]
    pub nodes: HashMap<String, Osn>,
}

/// A channel list entry for the channels page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChannelSummary {
    pub name: String,
}

/// An admin identity used to authenticate participation calls.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Identity {
    pub name: String,
    pub cert: String,
    pub private_key: String,
}

/// Response shape of the unjoin endpoint.
///
/// The endpoint reports failure through the `error` field rather than an
/// HTTP error status, e.g. "cannot remove: channel does not exist".
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnjoinResponse {
    #[serde(default)]
    pub error: Option<String>,
}
