pub use cgmath;
pub use collision::{BoundsMode, Footprint};
pub use config::SimulationConfig;
pub use controls::{Control, Controls};
pub use obstacle::Obstacle;
pub use simulation::{Movement, Placement, Simulation};
use slotmap::{new_key_type, SlotMap};
pub use slotmap::{Key, KeyData};
pub use tank::{propose, Pose, Tank, TankAttributes};
pub use util::{Interval, Rect};

pub mod collision;
mod config;
mod controls;
mod debug;
pub mod math;
mod obstacle;
mod simulation;
mod tank;
mod util;

new_key_type! {
    /// Unique ID of an [Obstacle].
    pub struct ObstacleId;
}

/// The obstacles in a simulation. Obstacles are never removed,
/// so iteration order is the order of insertion.
pub type ObstacleSet = SlotMap<ObstacleId, Obstacle>;
