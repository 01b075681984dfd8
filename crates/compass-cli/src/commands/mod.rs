pub mod dispatch;
pub mod package;
pub mod scenario_assignment;
