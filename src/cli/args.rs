//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::platform::Platform;

/// depguide - Explain missing dependencies and how to install them.
#[derive(Debug, Parser)]
#[command(name = "depguide")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides depguide.yml discovery)
    #[arg(short, long, global = true, env = "DEPGUIDE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Treat the machine as this distributor instead of detecting it
    #[arg(long, global = true, env = "DEPGUIDE_DISTRIBUTOR")]
    pub distributor: Option<String>,

    /// Description shown for the distributor given with --distributor (ignored without it)
    #[arg(long, global = true, env = "DEPGUIDE_DESCRIPTION")]
    pub description: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The platform forced on the command line, if any.
    pub fn platform_override(&self) -> Option<Platform> {
        let distributor = self.distributor.as_deref()?;
        let description = self.description.as_deref().unwrap_or(distributor);
        Some(Platform::new(distributor, description))
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Explain a "No module named ..." failure message
    Explain(ExplainArgs),

    /// Validate every registered dependency
    Check,

    /// Show the resolved platform
    Platform(PlatformArgs),

    /// List registered dependencies
    List(ListArgs),
}

/// Arguments for the `explain` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExplainArgs {
    /// The failure message, e.g. "No module named gi.repository"
    pub message: String,
}

/// Arguments for the `platform` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PlatformArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
