//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`channels`, `unjoin`) as plain structs so the
//! form and page logic stays testable without a browser. Components wrap
//! these in `RwSignal`s, either provided via context or held locally.

pub mod channels;
pub mod unjoin;
