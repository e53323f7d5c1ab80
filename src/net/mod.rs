//! Network layer: wire types, REST wrappers, and the unjoin fan-out.

pub mod api;
pub mod types;
pub mod unjoin;
