use compass_core::model::{AutomaticScenarioAssignment, LabelSelector};

use super::entity::Entity;

pub trait EntityConverter: Send + Sync {
    fn to_entity(&self, model: &AutomaticScenarioAssignment) -> Entity;
    fn from_entity(&self, entity: &Entity) -> AutomaticScenarioAssignment;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Converter;

impl EntityConverter for Converter {
    fn to_entity(&self, model: &AutomaticScenarioAssignment) -> Entity {
        Entity {
            scenario: model.scenario_name.clone(),
            tenant_id: model.tenant.clone(),
            selector_key: model.selector.key.clone(),
            selector_value: model.selector.value.clone(),
        }
    }

    fn from_entity(&self, entity: &Entity) -> AutomaticScenarioAssignment {
        AutomaticScenarioAssignment {
            scenario_name: entity.scenario.clone(),
            tenant: entity.tenant_id.clone(),
            selector: LabelSelector {
                key: entity.selector_key.clone(),
                value: entity.selector_value.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn maps_columns_both_ways() {
        let model = AutomaticScenarioAssignment {
            scenario_name: "scenario-A".into(),
            tenant: "tenant-1".into(),
            selector: LabelSelector {
                key: "key".into(),
                value: "value".into(),
            },
        };

        let entity = Converter.to_entity(&model);
        assert_eq!(
            entity,
            Entity {
                scenario: "scenario-A".into(),
                tenant_id: "tenant-1".into(),
                selector_key: "key".into(),
                selector_value: "value".into(),
            }
        );
        assert_eq!(Converter.from_entity(&entity), model);
    }
}
