//! Bounding box collision checks between the tank and the obstacles.

use crate::math::{rotated_half_extents, Point2d};
use crate::util::Rect;
use crate::{ObstacleId, ObstacleSet};
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rectangular extents of a body on the ground plane, in m.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Footprint {
    /// The extent along the x-axis.
    pub width: f64,
    /// The extent along the z-axis.
    pub depth: f64,
}

/// How the tank's collision box responds to its heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundsMode {
    /// The box always has the unrotated footprint's extents.
    #[default]
    Fixed,
    /// The box encloses the footprint rotated by the heading,
    /// so it grows at oblique headings.
    Rotated,
}

impl Footprint {
    /// Creates a footprint. Negative sizes are clamped to zero.
    pub fn new(width: f64, depth: f64) -> Self {
        Self {
            width: width.max(0.0),
            depth: depth.max(0.0),
        }
    }

    /// Creates a square footprint.
    pub fn square(size: f64) -> Self {
        Self::new(size, size)
    }

    /// The axis-aligned box covered by the footprint when centred at `pos`.
    pub fn bounds(&self, pos: Point2d) -> Rect {
        Rect::from_centre(pos, 0.5 * self.width, 0.5 * self.depth)
    }

    /// The axis-aligned collision box for a body centred at `pos` with the given heading.
    pub fn bounds_with_heading(&self, pos: Point2d, heading: f64, mode: BoundsMode) -> Rect {
        match mode {
            BoundsMode::Fixed => self.bounds(pos),
            BoundsMode::Rotated => {
                let (half_x, half_z) =
                    rotated_half_extents(0.5 * self.width, 0.5 * self.depth, heading);
                Rect::from_centre(pos, half_x, half_z)
            }
        }
    }
}

/// Checks whether a body with the given collision box would overlap any obstacle.
pub fn is_blocked(bounds: &Rect, obstacles: &ObstacleSet) -> bool {
    first_blocking(bounds, obstacles).is_some()
}

/// Finds the earliest inserted obstacle overlapping the given collision box.
pub fn first_blocking(bounds: &Rect, obstacles: &ObstacleSet) -> Option<ObstacleId> {
    let hit = obstacles
        .iter()
        .find(|(_, obstacle)| bounds.overlaps(&obstacle.bounds()))
        .map(|(id, _)| id);
    trace!("first_blocking({:?}) -> {:?}", bounds, hit);
    hit
}

#[cfg(test)]
mod test {
    use super::{first_blocking, is_blocked, BoundsMode, Footprint};
    use crate::math::Point2d;
    use crate::obstacle::Obstacle;
    use crate::ObstacleSet;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn obstacle_set(obstacles: &[(Point2d, Footprint)]) -> ObstacleSet {
        let mut set = ObstacleSet::default();
        for (pos, footprint) in obstacles {
            set.insert_with_key(|id| Obstacle::new(id, *pos, *footprint, 4.0));
        }
        set
    }

    #[test]
    fn empty_set_never_blocks() {
        let set = ObstacleSet::default();
        let footprint = Footprint::new(6.0, 4.0);
        for pos in [(0.0, 0.0), (15.0, 0.0), (-1e6, 3.5), (0.3, -0.3)] {
            let bounds = footprint.bounds(Point2d::new(pos.0, pos.1));
            assert!(!is_blocked(&bounds, &set));
        }
    }

    #[test]
    fn coincident_obstacle_blocks() {
        for (width, depth) in [(6.0, 4.0), (0.5, 0.5), (1e-3, 10.0), (4.0, 4.0)] {
            let footprint = Footprint::new(width, depth);
            for pos in [(0.0, 0.0), (-7.5, 12.25), (100.0, -3.0)] {
                let pos = Point2d::new(pos.0, pos.1);
                let set = obstacle_set(&[(pos, footprint)]);
                assert!(is_blocked(&footprint.bounds(pos), &set));
            }
        }
    }

    #[test]
    fn zero_size_footprint_is_well_defined() {
        let point = Footprint::new(0.0, 0.0);
        let set = obstacle_set(&[(Point2d::new(0.0, 0.0), Footprint::square(4.0))]);
        assert!(is_blocked(&point.bounds(Point2d::new(1.0, 1.0)), &set));
        assert!(!is_blocked(&point.bounds(Point2d::new(2.0, 0.0)), &set));
        assert!(!is_blocked(&point.bounds(Point2d::new(3.0, 0.0)), &set));
    }

    #[test]
    fn negative_sizes_are_clamped() {
        let footprint = Footprint::new(-2.0, 3.0);
        assert_eq!(footprint.width, 0.0);
        assert_eq!(footprint.depth, 3.0);
    }

    #[test]
    fn separation_is_monotonic() {
        let agent = Footprint::new(6.0, 4.0);
        let set = obstacle_set(&[(Point2d::new(10.0, 0.0), Footprint::square(4.0))]);

        // Walk away from the obstacle along each axis and count the transitions
        for dir in [(-1.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, -1.0)] {
            let mut transitions = 0;
            let mut prev = true;
            for i in 0..200 {
                let d = 0.05 * i as f64;
                let pos = Point2d::new(10.0 + dir.0 * d, dir.1 * d);
                let blocked = is_blocked(&agent.bounds(pos), &set);
                if blocked != prev {
                    transitions += 1;
                    assert!(!blocked);
                }
                prev = blocked;
            }
            assert_eq!(transitions, 1);
            assert!(!prev);
        }
    }

    #[test]
    fn touching_boxes_do_not_block() {
        let agent = Footprint::new(6.0, 4.0);
        let set = obstacle_set(&[(Point2d::new(10.0, 0.0), Footprint::square(4.0))]);
        assert!(!is_blocked(&agent.bounds(Point2d::new(5.0, 0.0)), &set));
        assert!(is_blocked(&agent.bounds(Point2d::new(5.01, 0.0)), &set));
        assert!(!is_blocked(&agent.bounds(Point2d::new(7.0, 4.0)), &set));
    }

    #[test]
    fn first_blocking_uses_insertion_order() {
        let footprint = Footprint::square(4.0);
        let set = obstacle_set(&[
            (Point2d::new(50.0, 50.0), footprint),
            (Point2d::new(1.0, 0.0), footprint),
            (Point2d::new(-1.0, 0.0), footprint),
        ]);
        let ids = set.keys().collect::<Vec<_>>();
        let bounds = footprint.bounds(Point2d::new(0.0, 0.0));
        assert_eq!(first_blocking(&bounds, &set), Some(ids[1]));
    }

    #[test]
    fn rotated_bounds_grow_with_heading() {
        let footprint = Footprint::new(6.0, 4.0);
        let pos = Point2d::new(0.0, 0.0);

        let fixed = footprint.bounds_with_heading(pos, FRAC_PI_2, BoundsMode::Fixed);
        assert_eq!(fixed, footprint.bounds(pos));

        let quarter = footprint.bounds_with_heading(pos, FRAC_PI_2, BoundsMode::Rotated);
        assert!((quarter.x.max - 2.0).abs() < 1e-9);
        assert!((quarter.z.max - 3.0).abs() < 1e-9);

        let oblique = footprint.bounds_with_heading(pos, FRAC_PI_4, BoundsMode::Rotated);
        assert!(oblique.x.max > 3.0);
        assert!(oblique.z.max > 3.0);
    }
}
