use std::path::PathBuf;

use clap::Subcommand;

/// Package commands. Inputs and outputs use the GraphQL shape.
#[derive(Clone, Debug, Subcommand)]
pub enum PackageCommands {
    /// Create a package from a `PackageCreateInput` JSON file.
    Create {
        #[arg(long)]
        application: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Replace a package's fields from a `PackageUpdateInput` JSON file.
    Update {
        id: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Get a package by ID.
    Get { id: String },
    /// List the packages of an application.
    List {
        #[arg(long)]
        application: String,
    },
    /// Delete a package.
    Delete { id: String },
}
