use anyhow::{Context, bail};
use compass_core::model::{AutomaticScenarioAssignment, LabelSelector};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ScenarioAssignmentCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `compass scenario-assignment`.
pub async fn handle(
    action: &ScenarioAssignmentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ScenarioAssignmentCommands::Create {
            scenario,
            key,
            value,
        } => {
            let assignment = AutomaticScenarioAssignment {
                scenario_name: scenario.clone(),
                tenant: ctx.tenant.clone(),
                selector: LabelSelector {
                    key: key.clone(),
                    value: value.clone(),
                },
            };
            ctx.assignments
                .create(&ctx.db, &assignment)
                .await
                .with_context(|| format!("failed to assign scenario '{scenario}'"))?;
            output(&assignment, flags.format)
        }
        ScenarioAssignmentCommands::Get { scenario } => {
            let assignment = ctx
                .assignments
                .get_for_scenario_name(&ctx.db, &ctx.tenant, scenario)
                .await
                .with_context(|| format!("failed to get assignment for scenario '{scenario}'"))?;
            output(&assignment, flags.format)
        }
        ScenarioAssignmentCommands::List { key, value } => {
            let selector = LabelSelector {
                key: key.clone(),
                value: value.clone(),
            };
            let assignments = ctx
                .assignments
                .get_for_selector(&ctx.db, &selector, &ctx.tenant)
                .await?;
            output(&assignments, flags.format)
        }
        ScenarioAssignmentCommands::Delete {
            scenario,
            key,
            value,
        } => {
            let deleted = match (scenario, key, value) {
                (Some(scenario), _, _) => {
                    ctx.assignments
                        .delete_for_scenario_name(&ctx.db, &ctx.tenant, scenario)
                        .await?
                }
                (None, Some(key), Some(value)) => {
                    let selector = LabelSelector {
                        key: key.clone(),
                        value: value.clone(),
                    };
                    ctx.assignments
                        .delete_for_selector(&ctx.db, &ctx.tenant, &selector)
                        .await?
                }
                _ => bail!("pass --scenario, or both --key and --value"),
            };
            output(&json!({ "deleted": deleted }), flags.format)
        }
    }
}
