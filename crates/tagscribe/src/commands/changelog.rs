//! Changelog command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use tagscribe_config::{ChangelogConfig, load_or_default};
use tagscribe_core::{ChangelogAssembler, ChangelogOptions, ChangelogWriter, CoreResult};
use tagscribe_git::{Repository, RevisionHistory};

/// Arguments for the changelog command.
#[derive(Debug, Args)]
pub struct ChangelogArgs {
    /// Main file header in output (default: "Projecty McProjectFace")
    pub header: Option<String>,

    /// Label commits made since the latest tag as NEW_TAG
    #[arg(long, value_name = "NEW_TAG")]
    pub new_tag: Option<String>,

    /// Write changelog to this directory (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// Write changelog to this file name (default: changelog.md)
    #[arg(long, value_name = "NAME")]
    pub filename: Option<String>,

    /// Fail when a commit range cannot be read instead of writing a placeholder
    #[arg(long)]
    pub strict: bool,
}

impl ChangelogArgs {
    /// Overrides configuration values with the ones given on the command line.
    fn apply(&self, mut config: ChangelogConfig) -> ChangelogConfig {
        if let Some(header) = &self.header {
            config.header.clone_from(header);
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = Some(output_dir.clone());
        }
        if let Some(filename) = &self.filename {
            config.filename.clone_from(filename);
        }
        config.strict |= self.strict;
        config
    }
}

/// Runs the changelog command.
pub fn run(args: ChangelogArgs, repo_dir: &Path) -> Result<()> {
    let config = load_or_default(repo_dir).context("failed to load configuration")?;
    let changelog = args.apply(config.changelog);
    let output_path = changelog.output_path();

    let repo = Repository::discover(repo_dir).context("failed to open git repository")?;
    info!(repo = %repo.path().display(), output = %output_path.display(), "generating changelog");

    let mut options = ChangelogOptions::from_config(&changelog);
    options.new_tag = args.new_tag;

    write_changelog(&repo, &options, &output_path).with_context(|| {
        format!(
            "file \"{}\" was not written or maybe partially written",
            output_path.display()
        )
    })?;

    println!("success: file '{}' has been created", output_path.display());
    Ok(())
}

/// Streams the assembled changelog to `path`.
fn write_changelog(
    history: &dyn RevisionHistory,
    options: &ChangelogOptions,
    path: &Path,
) -> CoreResult<()> {
    let mut writer = ChangelogWriter::create(path)?;
    ChangelogAssembler::new(history).assemble_into(options, &mut writer)?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> ChangelogArgs {
        ChangelogArgs {
            header: None,
            new_tag: None,
            output_dir: None,
            filename: None,
            strict: false,
        }
    }

    #[test]
    fn test_apply_keeps_config_without_flags() {
        let config = ChangelogConfig {
            header: "From Config".to_string(),
            filename: "HISTORY.md".to_string(),
            strict: true,
            ..ChangelogConfig::default()
        };

        let applied = empty_args().apply(config.clone());
        assert_eq!(applied, config);
    }

    #[test]
    fn test_apply_overrides_config() {
        let args = ChangelogArgs {
            header: Some("From Flag".to_string()),
            output_dir: Some(PathBuf::from("out")),
            filename: Some("NOTES.md".to_string()),
            strict: true,
            ..empty_args()
        };

        let applied = args.apply(ChangelogConfig::default());
        assert_eq!(applied.header, "From Flag");
        assert_eq!(applied.output_path(), PathBuf::from("out/NOTES.md"));
        assert!(applied.strict);
    }
}
