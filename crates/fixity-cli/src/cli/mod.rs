//! CLI for the fixity verification toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fixity_core::config;
use std::path::Path;

use commands::{run_audit, run_check, run_completions, run_digest, run_man};

/// Top-level CLI for the fixity verification toolkit.
#[derive(Debug, Parser)]
#[command(name = "fixity")]
#[command(about = "fixity: checksum/size verification for mirrored repository content", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Verify one stored file against an expected checksum and size.
    Check {
        /// Path of the stored file.
        path: String,

        /// Expected checksum identifier, e.g. `sha256:<hex>`.
        #[arg(long)]
        checksum: String,

        /// Expected size in bytes.
        #[arg(long)]
        size: u64,
    },

    /// Audit every mirror copy listed in a manifest file.
    Audit {
        /// Path to the JSON manifest.
        manifest: String,

        /// Check up to N mirrors concurrently (default from config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// Compute a digest of a file (e.g. to record new content).
    Digest {
        /// Path to the file.
        path: String,

        /// Digest algorithm token (md5, sha1, sha256, sha512). Defaults to
        /// the config `default_algorithm`, else sha256.
        #[arg(long)]
        algorithm: Option<String>,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Render the man page on stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                path,
                checksum,
                size,
            } => {
                if !run_check(Path::new(&path), &checksum, size)? {
                    std::process::exit(1);
                }
            }
            CliCommand::Audit { manifest, jobs } => {
                if run_audit(Path::new(&manifest), &cfg, jobs).await? > 0 {
                    std::process::exit(1);
                }
            }
            CliCommand::Digest { path, algorithm } => {
                run_digest(Path::new(&path), algorithm.as_deref(), &cfg)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
