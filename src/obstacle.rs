use crate::collision::Footprint;
use crate::math::Point2d;
use crate::util::Rect;
use crate::ObstacleId;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A static box which blocks the tank's movement.
///
/// Obstacles are never moved once placed.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Obstacle {
    /// The obstacle's ID.
    id: ObstacleId,
    /// The world space coordinates of the centre of the obstacle.
    pos: Point2d,
    /// The extents of the obstacle on the ground plane.
    footprint: Footprint,
    /// The height of the obstacle in m. Has no effect on collisions.
    height: f64,
}

impl Obstacle {
    /// Creates a new obstacle.
    pub fn new(id: ObstacleId, pos: Point2d, footprint: Footprint, height: f64) -> Self {
        Self {
            id,
            pos,
            footprint,
            height,
        }
    }

    /// Gets the obstacle's ID.
    pub fn id(&self) -> ObstacleId {
        self.id
    }

    /// The world space coordinates of the centre of the obstacle.
    pub fn position(&self) -> Point2d {
        self.pos
    }

    /// The extents of the obstacle on the ground plane.
    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// The height of the obstacle in m.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The world space bounding box of the obstacle.
    pub fn bounds(&self) -> Rect {
        self.footprint.bounds(self.pos)
    }
}
