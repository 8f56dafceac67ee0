//! `fixity man` – render the man page.

use anyhow::Result;
use clap::CommandFactory;
use clap_mangen::Man;
use std::io::Write;

use crate::cli::Cli;

/// Render the roff man page to stdout.
pub fn run_man() -> Result<()> {
    let man = Man::new(Cli::command());
    let mut out = Vec::new();
    man.render(&mut out)?;
    std::io::stdout().write_all(&out)?;
    Ok(())
}
