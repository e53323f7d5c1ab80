//! Reusable UI components.

pub mod channel_card;
pub mod unjoin_channel_modal;
