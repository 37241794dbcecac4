//! Markdown rendering helpers shared by the tools

pub mod formatter;
pub mod status;
