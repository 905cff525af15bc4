//! CLI command implementations.

pub mod generate;
pub mod init;
pub mod json_output;
pub mod validate;
