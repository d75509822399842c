//! CLI definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Generate a markdown changelog from a repository's tag history.
#[derive(Debug, Parser)]
#[command(name = "tagscribe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run as if started in this directory
    #[arg(
        short = 'C',
        long = "repo",
        global = true,
        env = "TAGSCRIBE_REPO",
        default_value = "."
    )]
    pub repo: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a default tagscribe.toml
    Init(commands::init::InitArgs),

    /// Generate changelog from git tags
    Changelog(commands::changelog::ChangelogArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => commands::init::run(&args, &self.repo),
            Commands::Changelog(args) => commands::changelog::run(args, &self.repo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_changelog_defaults() {
        let cli = Cli::try_parse_from(["tagscribe", "changelog"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.repo, PathBuf::from("."));

        let Commands::Changelog(args) = cli.command else {
            panic!("Expected changelog command");
        };
        assert!(args.header.is_none());
        assert!(args.new_tag.is_none());
        assert!(args.output_dir.is_none());
        assert!(args.filename.is_none());
        assert!(!args.strict);
    }

    #[test]
    fn test_parse_changelog_all_options() {
        let cli = Cli::try_parse_from([
            "tagscribe",
            "-v",
            "-C",
            "/tmp/repo",
            "changelog",
            "My Project",
            "--new-tag=1.2.0",
            "--output-dir=docs",
            "--filename=HISTORY.md",
            "--strict",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.repo, PathBuf::from("/tmp/repo"));

        let Commands::Changelog(args) = cli.command else {
            panic!("Expected changelog command");
        };
        assert_eq!(args.header.as_deref(), Some("My Project"));
        assert_eq!(args.new_tag.as_deref(), Some("1.2.0"));
        assert_eq!(args.output_dir, Some(PathBuf::from("docs")));
        assert_eq!(args.filename.as_deref(), Some("HISTORY.md"));
        assert!(args.strict);
    }

    #[test]
    fn test_parse_init_force() {
        let cli = Cli::try_parse_from(["tagscribe", "init", "--force"]).unwrap();
        let Commands::Init(args) = cli.command else {
            panic!("Expected init command");
        };
        assert!(args.force);
    }

    #[test]
    fn test_missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["tagscribe"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
