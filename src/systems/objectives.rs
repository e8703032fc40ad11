use bevy_ecs::{resource::Resource, system::{Res, ResMut}};
use tracing::info;

use crate::{
    constants::rules,
    systems::components::{Inventory, ScoreResource},
};

/// The seven completion milestones.
///
/// Every flag is monotonic: it is latched true exactly once, the first frame
/// its condition holds, and is never cleared for the rest of the session.
/// The three squash flags are latched directly by the interaction resolver;
/// the rest are derived from cumulative state here, every frame.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Objectives {
    pub collect_resources: bool,
    pub squash_simple_bug: bool,
    pub collect_three_agents: bool,
    pub squash_agent_bug: bool,
    pub find_mcp_component: bool,
    pub squash_mcp_bug: bool,
    pub achieve_2000_points: bool,
}

impl Objectives {
    pub fn all_complete(&self) -> bool {
        self.collect_resources
            && self.squash_simple_bug
            && self.collect_three_agents
            && self.squash_agent_bug
            && self.find_mcp_component
            && self.squash_mcp_bug
            && self.achieve_2000_points
    }

    pub fn completed_count(&self) -> usize {
        self.checklist().iter().filter(|(_, done)| *done).count()
    }

    /// Checklist lines in presentation order.
    pub fn checklist(&self) -> [(&'static str, bool); 7] {
        [
            ("Find and collect resources", self.collect_resources),
            ("Squash simple bugs (100 pts)", self.squash_simple_bug),
            ("Collect 3 agent spheres", self.collect_three_agents),
            ("Squash agent bugs (300 pts)", self.squash_agent_bug),
            ("Find MCP components", self.find_mcp_component),
            ("Squash MCP bugs (500 pts)", self.squash_mcp_bug),
            ("Achieve 2000+ points", self.achieve_2000_points),
        ]
    }
}

/// Latches the state-derived objectives from current cumulative totals.
///
/// Runs after the interaction resolver each frame. Conditions are only ever
/// OR-ed in; a later squash spending the agent counter back to zero cannot
/// clear `collect_three_agents` once it has been observed true.
pub fn objective_system(mut objectives: ResMut<Objectives>, score: Res<ScoreResource>, inventory: Res<Inventory>) {
    let before = *objectives;

    objectives.collect_resources |= inventory.agents > 0 || inventory.mcp;
    objectives.collect_three_agents |= inventory.agents >= rules::AGENT_COST;
    objectives.find_mcp_component |= inventory.mcp;
    objectives.achieve_2000_points |= score.0 >= rules::SCORE_TARGET;

    if *objectives != before {
        info!(
            completed = objectives.completed_count(),
            total = objectives.checklist().len(),
            "Objective completed"
        );
    }
}
