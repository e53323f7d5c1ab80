#[cfg(test)]
#[path = "channels_test.rs"]
mod channels_test;

use crate::net::types::ChannelSummary;

/// Shared channel list state for the channels page.
#[derive(Clone, Debug, Default)]
pub struct ChannelsState {
    pub items: Vec<ChannelSummary>,
    pub loading: bool,
}
