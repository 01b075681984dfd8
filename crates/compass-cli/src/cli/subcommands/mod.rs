mod package;
mod scenario_assignment;

pub use package::PackageCommands;
pub use scenario_assignment::ScenarioAssignmentCommands;
