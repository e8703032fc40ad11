use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use bitflags::bitflags;
use glam::{Vec2, Vec3};
use strum_macros::EnumIter;

use crate::constants::rules;

/// An RGB color handed to the presentation layer. The core never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Warning red used for spawn announcements and rejected squashes.
    pub const ALERT: Rgb = Rgb(255, 102, 102);
    /// Bright green used for successful squashes.
    pub const SUCCESS: Rgb = Rgb(0, 255, 0);
    /// Yellow used for the level-complete celebration.
    pub const CELEBRATION: Rgb = Rgb(255, 255, 0);
}

/// A tag component for entities that are controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// World position, Y up.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec3);

/// The player's look direction. Pitch is clamped by the player system.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
}

/// Inventory precondition for squashing a bug kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquashGate {
    /// Always squashable.
    None,
    /// Requires a full set of agent spheres, which the squash consumes.
    Agents,
    /// Requires the MCP component, which the squash consumes.
    Mcp,
}

/// Per-frame motion applied to a bug by the motion system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionPattern {
    /// Heading advances a fixed step each frame; the bug races in a circle.
    CircleStrafe,
    /// Height is a sinusoid of session time, independent of prior position.
    VerticalBob,
    /// Heading is perturbed randomly each frame.
    RandomWalk,
    /// Height climbs a fixed step each frame, unbounded.
    UpwardDrift,
    /// Both horizontal axes are perturbed randomly each frame, not re-centered.
    Jitter,
    /// No translation; the bug only spins in place.
    Stationary,
}

/// A tag component denoting which kind of bug an entity is.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum BugKind {
    RaceCondition,
    MemoryLeak,
    ZombieProcess,
    Deadlock,
    ContainerDrift,
    PortConflict,
}

impl BugKind {
    /// The inventory gate that must be satisfied to squash this kind.
    pub fn gate(&self) -> SquashGate {
        match self {
            BugKind::RaceCondition | BugKind::MemoryLeak | BugKind::ZombieProcess => SquashGate::None,
            BugKind::Deadlock | BugKind::ContainerDrift => SquashGate::Agents,
            BugKind::PortConflict => SquashGate::Mcp,
        }
    }

    /// Points awarded for squashing this kind.
    pub fn points(&self) -> u32 {
        match self.gate() {
            SquashGate::None => rules::POINTS_SIMPLE,
            SquashGate::Agents => rules::POINTS_AGENT,
            SquashGate::Mcp => rules::POINTS_MCP,
        }
    }

    /// The motion pattern the motion system applies to this kind.
    pub fn pattern(&self) -> MotionPattern {
        match self {
            BugKind::RaceCondition => MotionPattern::CircleStrafe,
            BugKind::MemoryLeak => MotionPattern::VerticalBob,
            BugKind::ZombieProcess => MotionPattern::RandomWalk,
            BugKind::Deadlock => MotionPattern::Stationary,
            BugKind::ContainerDrift => MotionPattern::UpwardDrift,
            BugKind::PortConflict => MotionPattern::Jitter,
        }
    }

    /// Display name shown on labels and notifications.
    pub fn label(&self) -> &'static str {
        match self {
            BugKind::RaceCondition => "Race Condition",
            BugKind::MemoryLeak => "Memory Leak",
            BugKind::ZombieProcess => "Zombie Process",
            BugKind::Deadlock => "Deadlock",
            BugKind::ContainerDrift => "Container Drift",
            BugKind::PortConflict => "Port Conflict",
        }
    }

    /// One-line flavor text shown under the label.
    pub fn blurb(&self) -> &'static str {
        match self {
            BugKind::RaceCondition => "Racing in circles",
            BugKind::MemoryLeak => "Dripping memory",
            BugKind::ZombieProcess => "Shambling around",
            BugKind::Deadlock | BugKind::ContainerDrift => "Need 3 agents",
            BugKind::PortConflict => "Need MCP component",
        }
    }

    /// Human description of the inventory needed to squash this kind.
    pub fn requirement(&self) -> &'static str {
        match self.gate() {
            SquashGate::None => "nothing",
            SquashGate::Agents => "3 agent spheres",
            SquashGate::Mcp => "MCP component",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            BugKind::RaceCondition => Rgb(255, 0, 0),
            BugKind::MemoryLeak => Rgb(0, 102, 255),
            BugKind::ZombieProcess => Rgb(153, 0, 255),
            BugKind::Deadlock => Rgb(255, 255, 0),
            BugKind::ContainerDrift => Rgb(0, 255, 0),
            BugKind::PortConflict => Rgb(255, 102, 0),
        }
    }
}

/// Per-bug behavior state advanced by the motion system.
#[derive(Component, Debug, Clone, Copy)]
pub struct Bug {
    /// Distance covered per frame while moving, in world units.
    pub speed: f32,
    /// Current heading, in radians.
    pub heading: f32,
}

/// Cosmetic rotation state. Every bug spins regardless of its motion pattern.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Spin {
    pub pitch: f32,
    pub roll: f32,
}

/// A tag component denoting which kind of collectible an entity is.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectibleKind {
    /// Contributes to the agent counter, capped at a full set.
    AgentSphere,
    /// Grants the MCP flag.
    McpComponent,
}

impl CollectibleKind {
    /// Display name shown in pickup notifications.
    pub fn label(&self) -> &'static str {
        match self {
            CollectibleKind::AgentSphere => "Agent Sphere",
            CollectibleKind::McpComponent => "MCP Component",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            CollectibleKind::AgentSphere => Rgb(0, 255, 255),
            CollectibleKind::McpComponent => Rgb(255, 102, 0),
        }
    }
}

/// Marker inserted when a collectible is picked up. Collected entities are
/// hidden and ignored by the resolver, but never despawned.
#[derive(Component, Debug, Clone, Copy)]
pub struct Collected;

/// A decorative structure. Render-only; nothing collides with it.
#[derive(Component, Debug, Clone, Copy)]
pub struct Scenery {
    pub extents: Vec3,
    pub color: Rgb,
}

/// Debris spawned when a bug is squashed, expired by the lifetime system.
#[derive(Component, Debug, Clone, Copy)]
pub struct Particle {
    pub color: Rgb,
}

#[derive(Bundle)]
pub struct BugBundle {
    pub kind: BugKind,
    pub bug: Bug,
    pub position: Position,
    pub spin: Spin,
}

#[derive(Bundle)]
pub struct CollectibleBundle {
    pub kind: CollectibleKind,
    pub position: Position,
}

#[derive(Resource)]
pub struct GlobalState {
    pub exit: bool,
}

/// Cumulative score. Only ever increases.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct ScoreResource(pub u32);

/// Total bugs squashed this session.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SquashCount(pub u32);

/// The player's collected resources.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Inventory {
    /// Agent spheres held, clamped to [0, AGENT_CAP].
    pub agents: u8,
    /// Whether an MCP component is held.
    pub mcp: bool,
}

impl Inventory {
    /// Adds one agent sphere, capped at a full set. Returns the new count.
    pub fn add_agent(&mut self) -> u8 {
        self.agents = (self.agents + 1).min(rules::AGENT_CAP);
        self.agents
    }

    /// Whether an agent-gated squash is currently affordable.
    pub fn has_agent_set(&self) -> bool {
        self.agents >= rules::AGENT_COST
    }

    /// Consumes a full set of agent spheres, clamped at zero.
    pub fn spend_agent_set(&mut self) {
        self.agents = self.agents.saturating_sub(rules::AGENT_COST);
    }
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct DeltaTime {
    pub seconds: f32,
    pub ticks: u32,
}

/// Accumulated session time, advanced once per frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SessionClock {
    pub elapsed: f64,
    pub ticks: u64,
}

/// Seconds since the previous spawn wave, polled once per frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SpawnTimer {
    pub since_last: f32,
}

/// Whether the debug readout overlay is enabled.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct DebugState {
    pub enabled: bool,
}

bitflags! {
    /// Movement keys currently held, maintained by the input system.
    #[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MovementKeys: u8 {
        const FORWARD = 1 << 0;
        const BACK = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

/// Pointer motion accumulated since the last frame, drained by the player system.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LookDelta(pub Vec2);
