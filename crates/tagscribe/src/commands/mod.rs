//! CLI subcommands.

pub mod changelog;
pub mod init;
