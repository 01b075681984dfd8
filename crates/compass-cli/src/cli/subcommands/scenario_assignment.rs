use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ScenarioAssignmentCommands {
    /// Assign a scenario to every object matching a label selector.
    Create {
        #[arg(long)]
        scenario: String,
        #[arg(long)]
        key: String,
        #[arg(long)]
        value: String,
    },
    /// Get the assignment of a scenario.
    Get { scenario: String },
    /// List assignments with the given selector.
    List {
        #[arg(long)]
        key: String,
        #[arg(long)]
        value: String,
    },
    /// Delete by scenario, or every assignment with a selector.
    Delete {
        #[arg(long, conflicts_with_all = ["key", "value"], required_unless_present = "key")]
        scenario: Option<String>,
        #[arg(long, requires = "value")]
        key: Option<String>,
        #[arg(long, requires = "key")]
        value: Option<String>,
    },
}
