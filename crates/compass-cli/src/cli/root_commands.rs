use clap::Subcommand;

use crate::cli::subcommands::{PackageCommands, ScenarioAssignmentCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Packages of an application.
    Package {
        #[command(subcommand)]
        action: PackageCommands,
    },
    /// Automatic scenario assignments.
    ScenarioAssignment {
        #[command(subcommand)]
        action: ScenarioAssignmentCommands,
    },
}
