use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Label key/value pair an assignment matches runtimes and applications on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct LabelSelector {
    pub key: String,
    pub value: String,
}

/// Automatically assigns `scenario_name` to every object in `tenant` whose
/// labels match `selector`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AutomaticScenarioAssignment {
    pub scenario_name: String,
    pub tenant: String,
    pub selector: LabelSelector,
}
