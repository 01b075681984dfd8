/// A row of the `automatic_scenario_assignments` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entity {
    pub scenario: String,
    pub tenant_id: String,
    pub selector_key: String,
    pub selector_value: String,
}
