use super::Pose;
use crate::controls::Controls;
use crate::math::heading_direction;
use crate::util::Interval;

/// Computes the candidate pose of the tank after one tick of the given controls.
///
/// The heading is turned first, and any translation is along the turned heading.
/// Opposing controls are both applied, so they cancel out.
///
/// # Parameters
/// * `pose` - The current pose
/// * `controls` - The held controls
/// * `speed` - The distance travelled per tick, in m
/// * `rotation_speed` - The angle turned per tick, in radians
pub fn propose(pose: Pose, controls: &Controls, speed: f64, rotation_speed: f64) -> Pose {
    let mut heading = pose.heading;
    if controls.left {
        heading += rotation_speed;
    }
    if controls.right {
        heading -= rotation_speed;
    }

    let step = speed * heading_direction(heading);
    let mut pos = pose.pos;
    if controls.forward {
        pos += step;
    }
    if controls.backward {
        pos -= step;
    }

    Pose { pos, heading }
}

/// Turns the turret about the vertical axis.
pub fn turn_turret(yaw: f64, controls: &Controls, speed: f64) -> f64 {
    let mut yaw = yaw;
    if controls.turret_left {
        yaw += speed;
    }
    if controls.turret_right {
        yaw -= speed;
    }
    yaw
}

/// Raises or lowers the cannon.
///
/// Each direction is only applied while the pitch is within `limits` on that side,
/// so the pitch may come to rest up to one step beyond a limit.
pub fn elevate_cannon(pitch: f64, controls: &Controls, speed: f64, limits: Interval<f64>) -> f64 {
    let mut pitch = pitch;
    if controls.cannon_up && pitch < limits.max {
        pitch += speed;
    }
    if controls.cannon_down && pitch > limits.min {
        pitch -= speed;
    }
    pitch
}
