use super::*;

#[test]
fn channels_state_defaults() {
    let s = ChannelsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
}
