//! CLI library components for the math worksheet generator.

pub mod logging;
pub mod pipeline;
