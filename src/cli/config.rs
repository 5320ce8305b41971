//! Configuration conversion utilities for CLI arguments

use crate::cli::main_impl::Cli;
use crate::config::{DownloadFailurePolicy, FetchConfig, ACCESS_KEY_ENV};
use crate::error::WallpaperError;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Convert CLI arguments to a validated [`FetchConfig`]
pub(crate) struct CliConfigBuilder;

impl CliConfigBuilder {
    /// Build FetchConfig from CLI arguments
    ///
    /// The access key comes from `--access-key` or `UNSPLASH_ACCESS_KEY`
    /// (clap resolves both into the same field).
    pub(crate) fn from_cli(cli: &Cli) -> Result<FetchConfig> {
        let access_key = cli
            .access_key
            .clone()
            .ok_or(WallpaperError::MissingCredential(ACCESS_KEY_ENV))?;

        let failure_policy = if cli.fail_fast {
            DownloadFailurePolicy::Abort
        } else {
            DownloadFailurePolicy::Skip
        };

        let config = FetchConfig::builder()
            .access_key(access_key)
            .per_page(cli.per_page)
            .failure_policy(failure_policy)
            .output_root(Self::output_root(cli)?)
            .build()
            .context("Invalid configuration")?;

        Ok(config)
    }

    /// `--output-root`, or the current directory
    pub(crate) fn output_root(cli: &Cli) -> Result<PathBuf> {
        match &cli.output_root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir().context("Failed to resolve current directory"),
        }
    }
}
