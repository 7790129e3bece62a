use self::motion::{elevate_cannon, turn_turret};
use crate::collision::{BoundsMode, Footprint};
use crate::controls::Controls;
use crate::math::Point2d;
use crate::util::{Interval, Rect};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::motion::propose;

mod motion;

/// The position and heading of a body on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    /// The world space coordinates of the body's centre.
    pub pos: Point2d,
    /// The rotation about the vertical axis in radians.
    /// Zero faces towards negative z.
    pub heading: f64,
}

/// The player controlled tank.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tank {
    /// The tank's fixed attributes.
    attributes: TankAttributes,
    /// The committed pose of the hull.
    pose: Pose,
    /// The turret's yaw relative to the hull, in radians.
    turret: f64,
    /// The cannon's pitch, in radians.
    cannon: f64,
}

/// The attributes of the tank.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TankAttributes {
    /// The hull's extents on the ground plane, in m.
    pub footprint: Footprint,
    /// The distance travelled per tick, in m.
    pub speed: f64,
    /// The angle the hull turns per tick, in radians.
    pub rotation_speed: f64,
    /// The angle the turret turns per tick, in radians.
    pub turret_speed: f64,
    /// The angle the cannon is raised or lowered per tick, in radians.
    pub cannon_speed: f64,
    /// The range of pitch within which the cannon may be moved, in radians.
    pub cannon_limits: Interval<f64>,
}

impl Default for TankAttributes {
    fn default() -> Self {
        Self {
            footprint: Footprint::new(6.0, 4.0),
            speed: 0.3,
            rotation_speed: 0.04,
            turret_speed: 0.04,
            cannon_speed: 0.02,
            cannon_limits: Interval::new(-0.2, 0.5),
        }
    }
}

impl Tank {
    /// Creates a new tank at the given pose.
    pub(crate) fn new(attributes: &TankAttributes, pose: Pose) -> Self {
        let speeds = [
            attributes.speed,
            attributes.rotation_speed,
            attributes.turret_speed,
            attributes.cannon_speed,
        ];
        if speeds.iter().any(|s| !s.is_finite() || *s < 0.0) {
            panic!("Tank speeds must be finite and non-negative");
        }
        Self {
            attributes: *attributes,
            pose,
            turret: 0.0,
            cannon: 0.0,
        }
    }

    /// The tank's attributes.
    pub fn attributes(&self) -> &TankAttributes {
        &self.attributes
    }

    /// The committed pose of the hull.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// The world space coordinates of the centre of the hull.
    pub fn position(&self) -> Point2d {
        self.pose.pos
    }

    /// The hull's heading in radians.
    pub fn heading(&self) -> f64 {
        self.pose.heading
    }

    /// The turret's yaw relative to the hull, in radians.
    pub fn turret(&self) -> f64 {
        self.turret
    }

    /// The cannon's pitch, in radians.
    pub fn cannon(&self) -> f64 {
        self.cannon
    }

    /// The hull's extents on the ground plane.
    pub fn footprint(&self) -> Footprint {
        self.attributes.footprint
    }

    /// The collision box of the hull at the given position, using the committed heading.
    pub fn bounds_at(&self, pos: Point2d, mode: BoundsMode) -> Rect {
        self.attributes
            .footprint
            .bounds_with_heading(pos, self.pose.heading, mode)
    }

    /// Computes the candidate pose for the given controls without committing it.
    pub fn propose(&self, controls: &Controls) -> Pose {
        propose(
            self.pose,
            controls,
            self.attributes.speed,
            self.attributes.rotation_speed,
        )
    }

    /// Commits a new heading.
    pub(crate) fn set_heading(&mut self, heading: f64) {
        self.pose.heading = heading;
    }

    /// Commits a new position.
    pub(crate) fn set_position(&mut self, pos: Point2d) {
        self.pose.pos = pos;
    }

    /// Moves the turret and cannon. These are never obstructed.
    pub(crate) fn aim(&mut self, controls: &Controls) {
        let attr = &self.attributes;
        self.turret = turn_turret(self.turret, controls, attr.turret_speed);
        self.cannon = elevate_cannon(self.cannon, controls, attr.cannon_speed, attr.cannon_limits);
    }
}
