//! Top-level pages routed by the application shell.

pub mod channels;
