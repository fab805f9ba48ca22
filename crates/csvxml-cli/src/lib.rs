//! CLI library components for csvxml.

pub mod logging;
pub mod pipeline;
