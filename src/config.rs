//! Simulation configuration.

use crate::collision::{BoundsMode, Footprint};
use crate::math::Point2d;
use crate::tank::{Pose, TankAttributes};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The parameters a [Simulation](crate::Simulation) is created with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// The attributes of the tank.
    pub tank: TankAttributes,
    /// The pose the tank starts in.
    pub start: Pose,
    /// The footprint given to obstacles placed without one.
    pub obstacle_footprint: Footprint,
    /// The height given to new obstacles, in m.
    pub obstacle_height: f64,
    /// The positions of the obstacles present at startup.
    pub seed_obstacles: Vec<Point2d>,
    /// How the tank's collision box responds to its heading.
    pub bounds_mode: BoundsMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tank: TankAttributes::default(),
            start: Pose {
                pos: Point2d::new(0.0, 20.0),
                heading: 0.0,
            },
            obstacle_footprint: Footprint::square(4.0),
            obstacle_height: 4.0,
            seed_obstacles: vec![Point2d::new(15.0, 0.0)],
            bounds_mode: BoundsMode::Fixed,
        }
    }
}

impl SimulationConfig {
    /// A configuration with the default tank at the origin and no obstacles.
    pub fn empty() -> Self {
        Self {
            start: Pose {
                pos: Point2d::new(0.0, 0.0),
                heading: 0.0,
            },
            seed_obstacles: vec![],
            ..Default::default()
        }
    }

    /// Parses a configuration from JSON. Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes the configuration as JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
