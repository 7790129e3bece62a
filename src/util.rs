//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

use crate::math::Point2d;
use cgmath::num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An interval on the real number line.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: std::cmp::PartialOrd> Interval<T> {
    /// Returns true if this interval overlaps with the other.
    /// Intervals which merely touch at an end point do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.max > other.min && other.max > self.min
    }

    /// Returns true if this interval contains the value.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

impl<T: Float> Interval<T> {
    /// Creates an interval with the given centre and radius.
    pub fn disc(centre: T, radius: T) -> Self {
        Self {
            min: centre - radius,
            max: centre + radius,
        }
    }

    /// Linearly interpolates between the ends of the interval.
    pub fn lerp(&self, t: T) -> T {
        self.min + t * (self.max - self.min)
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}

/// An axis-aligned rectangle on the ground plane.
///
/// The `x` interval spans world x, and the `z` interval spans world z
/// (stored in the `y` component of a [Point2d]).
#[derive(Copy, Clone, Default, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: Interval<f64>,
    pub z: Interval<f64>,
}

impl Rect {
    /// Creates a rectangle from its extents on each axis.
    pub const fn new(x: Interval<f64>, z: Interval<f64>) -> Self {
        Self { x, z }
    }

    /// Creates a rectangle centred on `centre` with the given half extents.
    pub fn from_centre(centre: Point2d, half_x: f64, half_z: f64) -> Self {
        Self {
            x: Interval::disc(centre.x, half_x),
            z: Interval::disc(centre.y, half_z),
        }
    }

    /// Returns true if the interiors of the two rectangles intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x.overlaps(&other.x) && self.z.overlaps(&other.z)
    }

    /// Returns true if the point lies within the rectangle or on its boundary.
    pub fn contains(&self, point: Point2d) -> bool {
        self.x.contains(point.x) && self.z.contains(point.y)
    }

    /// Gets the four corners, anticlockwise from the minimum corner.
    pub fn corners(&self) -> [Point2d; 4] {
        [
            Point2d::new(self.x.min, self.z.min),
            Point2d::new(self.x.max, self.z.min),
            Point2d::new(self.x.max, self.z.max),
            Point2d::new(self.x.min, self.z.max),
        ]
    }
}
