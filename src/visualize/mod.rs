//! Read-only export of the overlap graph for external rendering.

pub mod dot;
