use crate::collision::{first_blocking, BoundsMode, Footprint};
use crate::config::SimulationConfig;
use crate::controls::{Control, Controls};
#[cfg(feature = "debug")]
use crate::debug::take_debug_frame;
use crate::debug::debug_rect;
use crate::math::Point2d;
use crate::obstacle::Obstacle;
use crate::tank::Tank;
use crate::util::Rect;
use crate::{ObstacleId, ObstacleSet};
use log::{debug, info, trace};
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The maximum number of placement attempts per obstacle when scattering obstacles.
const SCATTER_ATTEMPTS: usize = 16;

/// A tank sandbox simulation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Simulation {
    /// The player controlled tank.
    tank: Tank,
    /// The static obstacles, in the order they were placed.
    obstacles: ObstacleSet,
    /// The controls held for the next tick.
    controls: Controls,
    /// The footprint given to obstacles placed without one.
    obstacle_footprint: Footprint,
    /// The height given to new obstacles.
    obstacle_height: f64,
    /// How the tank's collision box responds to its heading.
    bounds_mode: BoundsMode,
    /// The current frame of simulation.
    frame: usize,
    /// Debugging information from the previously simulated frame.
    #[cfg(feature = "debug")]
    #[cfg_attr(feature = "serde", serde(skip))]
    debug: serde_json::Value,
}

/// The outcome of a single tick for the tank's hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// No translation was requested, or the requested translations cancelled out.
    Idle,
    /// The tank moved to its candidate position.
    Moved,
    /// The candidate position overlapped the given obstacle, so the tank stayed put.
    Blocked(ObstacleId),
}

/// The result of a pointer press on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The point was on an existing obstacle.
    Selected(ObstacleId),
    /// A new obstacle was placed at the point.
    Placed(ObstacleId),
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// Creates a new simulation with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&SimulationConfig::default())
    }

    /// Creates a new simulation from the given configuration.
    pub fn with_config(config: &SimulationConfig) -> Self {
        let mut sim = Self {
            tank: Tank::new(&config.tank, config.start),
            obstacles: ObstacleSet::default(),
            controls: Controls::none(),
            obstacle_footprint: config.obstacle_footprint,
            obstacle_height: config.obstacle_height,
            bounds_mode: config.bounds_mode,
            frame: 0,
            #[cfg(feature = "debug")]
            debug: serde_json::Value::Null,
        };
        for pos in &config.seed_obstacles {
            sim.add_obstacle(*pos);
        }
        info!(
            "Created simulation with tank at {:?} and {} obstacles",
            config.start.pos,
            sim.obstacles.len()
        );
        sim
    }

    /// Replaces the held controls used by subsequent ticks.
    pub fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
    }

    /// Gets the held controls.
    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Applies a key press or release to the held controls.
    ///
    /// # Parameters
    /// * `code` - The key code, as in [Control::from_code].
    /// * `pressed` - Whether the key was pressed (`true`) or released (`false`).
    ///
    /// # Returns
    /// Whether the key is bound to a control.
    pub fn key_event(&mut self, code: &str, pressed: bool) -> bool {
        match Control::from_code(code) {
            Some(control) => {
                self.controls.set(control, pressed);
                true
            }
            None => false,
        }
    }

    /// Adds an obstacle with the default footprint, centred at `pos`.
    pub fn add_obstacle(&mut self, pos: Point2d) -> ObstacleId {
        self.add_obstacle_with(pos, self.obstacle_footprint)
    }

    /// Adds an obstacle with the given footprint, centred at `pos`.
    pub fn add_obstacle_with(&mut self, pos: Point2d, footprint: Footprint) -> ObstacleId {
        let height = self.obstacle_height;
        let id = self
            .obstacles
            .insert_with_key(|id| Obstacle::new(id, pos, footprint, height));
        info!("Placed obstacle {:?} at {:?}", id, pos);
        id
    }

    /// Handles a pointer press at a point on the ground plane.
    ///
    /// Selects the obstacle under the point if there is one,
    /// otherwise places a new obstacle there.
    pub fn click(&mut self, point: Point2d) -> Placement {
        match self.obstacle_at(point) {
            Some(id) => Placement::Selected(id),
            None => Placement::Placed(self.add_obstacle(point)),
        }
    }

    /// Finds the earliest placed obstacle covering the given point.
    pub fn obstacle_at(&self, point: Point2d) -> Option<ObstacleId> {
        self.obstacles
            .iter()
            .find(|(_, obstacle)| obstacle.bounds().contains(point))
            .map(|(id, _)| id)
    }

    /// Scatters up to `count` obstacles uniformly at random within `area`,
    /// keeping clear of the tank's current collision box.
    ///
    /// # Returns
    /// The IDs of the obstacles placed, which may be fewer than `count`
    /// if there was not enough free space.
    pub fn scatter_obstacles<R: Rng>(
        &mut self,
        count: usize,
        area: Rect,
        rng: &mut R,
    ) -> Vec<ObstacleId> {
        let keep_clear = self.tank.bounds_at(self.tank.position(), self.bounds_mode);
        let mut placed = vec![];
        for _ in 0..(count * SCATTER_ATTEMPTS) {
            if placed.len() == count {
                break;
            }
            let pos = Point2d::new(area.x.lerp(rng.gen()), area.z.lerp(rng.gen()));
            if self.obstacle_footprint.bounds(pos).overlaps(&keep_clear) {
                continue;
            }
            placed.push(self.add_obstacle(pos));
        }
        if placed.len() < count {
            debug!("Scattered {} of {} obstacles", placed.len(), count);
        }
        placed
    }

    /// Checks whether the tank would collide with an obstacle if its hull were at `pos`.
    pub fn is_blocked(&self, pos: Point2d) -> bool {
        self.blocking_obstacle(pos).is_some()
    }

    /// Finds the earliest placed obstacle the tank would collide with if its hull were at `pos`.
    pub fn blocking_obstacle(&self, pos: Point2d) -> Option<ObstacleId> {
        first_blocking(&self.tank.bounds_at(pos, self.bounds_mode), &self.obstacles)
    }

    /// Finds every obstacle the tank would collide with if its hull were at `pos`.
    pub fn overlapping_obstacles(&self, pos: Point2d) -> SmallVec<[ObstacleId; 4]> {
        let bounds = self.tank.bounds_at(pos, self.bounds_mode);
        self.obstacles
            .iter()
            .filter(|(_, obstacle)| bounds.overlaps(&obstacle.bounds()))
            .map(|(id, _)| id)
            .collect()
    }

    /// Advances the simulation by one tick using the held controls.
    ///
    /// Turning is always applied. The hull only moves if its
    /// candidate position does not overlap an obstacle.
    pub fn step(&mut self) -> Movement {
        let controls = self.controls;
        let candidate = self.tank.propose(&controls);

        self.tank.set_heading(candidate.heading);
        self.tank.aim(&controls);

        let movement = if candidate.pos == self.tank.position() {
            Movement::Idle
        } else {
            let bounds = self.tank.bounds_at(candidate.pos, self.bounds_mode);
            debug_rect("candidate", &bounds);
            match first_blocking(&bounds, &self.obstacles) {
                Some(id) => {
                    debug_rect("blocker", &self.obstacles[id].bounds());
                    debug!(
                        "Frame {}: move to {:?} blocked by obstacle {:?}",
                        self.frame, candidate.pos, id
                    );
                    Movement::Blocked(id)
                }
                None => {
                    self.tank.set_position(candidate.pos);
                    Movement::Moved
                }
            }
        };

        trace!("Frame {}: {:?} -> {:?}", self.frame, movement, self.tank.pose());
        self.frame += 1;

        #[cfg(feature = "debug")]
        {
            self.debug = take_debug_frame();
        }

        movement
    }

    /// Gets the current simulation frame index.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Gets a reference to the tank.
    pub fn tank(&self) -> &Tank {
        &self.tank
    }

    /// Returns an iterator over all the obstacles, in the order they were placed.
    pub fn iter_obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.values()
    }

    /// Gets the number of obstacles.
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Gets a reference to the obstacle with the given ID.
    pub fn get_obstacle(&self, obstacle_id: ObstacleId) -> &Obstacle {
        &self.obstacles[obstacle_id]
    }

    /// How the tank's collision box responds to its heading.
    pub fn bounds_mode(&self) -> BoundsMode {
        self.bounds_mode
    }

    /// Gets the debugging information for the previously simulated frame as JSON array.
    #[cfg(feature = "debug")]
    pub fn debug(&mut self) -> serde_json::Value {
        self.debug.clone()
    }
}

#[cfg(all(test, feature = "debug"))]
mod test {
    use super::{Movement, Simulation};
    use crate::config::SimulationConfig;
    use crate::controls::{Control, Controls};
    use crate::math::Point2d;

    #[test]
    fn debug_frame_records_blocked_move() {
        let mut sim = Simulation::with_config(&SimulationConfig::empty());
        sim.add_obstacle(Point2d::new(0.0, -4.0));
        sim.set_controls(Controls::none().with(Control::Forward));
        assert!(matches!(sim.step(), Movement::Blocked(_)));

        let frame = sim.debug();
        let names = frame
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(names, ["candidate", "blocker"]);

        sim.set_controls(Controls::none());
        sim.step();
        assert!(sim.debug().as_array().unwrap().is_empty());
    }
}
