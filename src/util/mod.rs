//! Browser-facing adapters for the navigation gate's ports.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` glue from routing and gate logic so both
//! stay testable natively.

pub mod notify;
pub mod storage;
