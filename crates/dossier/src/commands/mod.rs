//! CLI command implementations

pub mod init;
pub mod patch;
pub mod render;
