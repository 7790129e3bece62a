//! Snapshots of the player's held controls.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The set of controls held during a single tick.
///
/// Every flag is independent; opposing flags may be held together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Controls {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub turret_left: bool,
    pub turret_right: bool,
    pub cannon_up: bool,
    pub cannon_down: bool,
}

/// A single control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Control {
    Forward,
    Backward,
    Left,
    Right,
    TurretLeft,
    TurretRight,
    CannonUp,
    CannonDown,
}

impl Control {
    /// Maps a keyboard key code, as reported by a browser `KeyboardEvent.code`,
    /// to the control it is bound to.
    pub fn from_code(code: &str) -> Option<Self> {
        use Control::*;
        let control = match code {
            "ArrowUp" => Forward,
            "ArrowDown" => Backward,
            "ArrowLeft" => Left,
            "ArrowRight" => Right,
            "KeyA" => TurretLeft,
            "KeyD" => TurretRight,
            "KeyW" => CannonUp,
            "KeyS" => CannonDown,
            _ => return None,
        };
        Some(control)
    }
}

impl Controls {
    /// Creates a snapshot with no controls held.
    pub fn none() -> Self {
        Default::default()
    }

    /// Sets a control as held (`true`) or released (`false`).
    pub fn set(&mut self, control: Control, held: bool) {
        *self.flag_mut(control) = held;
    }

    /// Returns a copy of this snapshot with the given control held.
    pub fn with(mut self, control: Control) -> Self {
        self.set(control, true);
        self
    }

    /// Returns true if the given control is held.
    pub fn is_held(&self, control: Control) -> bool {
        use Control::*;
        match control {
            Forward => self.forward,
            Backward => self.backward,
            Left => self.left,
            Right => self.right,
            TurretLeft => self.turret_left,
            TurretRight => self.turret_right,
            CannonUp => self.cannon_up,
            CannonDown => self.cannon_down,
        }
    }

    /// Returns true if a control which translates the tank is held.
    pub fn translating(&self) -> bool {
        self.forward || self.backward
    }

    fn flag_mut(&mut self, control: Control) -> &mut bool {
        use Control::*;
        match control {
            Forward => &mut self.forward,
            Backward => &mut self.backward,
            Left => &mut self.left,
            Right => &mut self.right,
            TurretLeft => &mut self.turret_left,
            TurretRight => &mut self.turret_right,
            CannonUp => &mut self.cannon_up,
            CannonDown => &mut self.cannon_down,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Control, Controls};

    #[test]
    fn press_and_release() {
        let mut controls = Controls::none();
        controls.set(Control::Forward, true);
        controls.set(Control::Left, true);
        assert!(controls.is_held(Control::Forward));
        assert!(controls.is_held(Control::Left));
        assert!(controls.translating());

        controls.set(Control::Forward, false);
        assert!(!controls.is_held(Control::Forward));
        assert!(controls.is_held(Control::Left));
        assert!(!controls.translating());
    }

    #[test]
    fn key_codes() {
        assert_eq!(Control::from_code("ArrowUp"), Some(Control::Forward));
        assert_eq!(Control::from_code("ArrowRight"), Some(Control::Right));
        assert_eq!(Control::from_code("KeyS"), Some(Control::CannonDown));
        assert_eq!(Control::from_code("KeyQ"), None);
        assert_eq!(Control::from_code("arrowup"), None);
    }

    #[test]
    fn opposing_flags_are_independent() {
        let controls = Controls::none()
            .with(Control::Forward)
            .with(Control::Backward);
        assert!(controls.forward && controls.backward);
    }
}
