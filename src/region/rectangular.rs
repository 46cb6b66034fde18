//! Rectangle spanned by two arbitrary corners

use crate::geometry::Vector;

/// Axis-aligned rectangle between two inclusive corners
///
/// The corners are kept as given; normalisation to lower/upper happens on
/// access so a selector's points round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectangularRegion {
    /// First corner as supplied
    pub position1: Vector,
    /// Second corner as supplied
    pub position2: Vector,
}

impl RectangularRegion {
    /// Create a rectangle between two corners in any order
    pub const fn new(position1: Vector, position2: Vector) -> Self {
        Self {
            position1,
            position2,
        }
    }

    /// Component-wise minimum of the corners
    pub fn lower_bound(&self) -> Vector {
        self.position1.min(self.position2)
    }

    /// Component-wise maximum of the corners
    pub fn upper_bound(&self) -> Vector {
        self.position1.max(self.position2)
    }

    /// Number of columns covered
    pub fn width(&self) -> usize {
        (i64::from(self.upper_bound().x) - i64::from(self.lower_bound().x) + 1) as usize
    }

    /// Number of rows covered
    pub fn height(&self) -> usize {
        (i64::from(self.upper_bound().y) - i64::from(self.lower_bound().y) + 1) as usize
    }

    /// Number of positions covered
    pub fn area(&self) -> usize {
        self.width().saturating_mul(self.height())
    }

    /// Test whether `position` lies within the corners, inclusive
    pub fn contains(&self, position: Vector) -> bool {
        let lower = self.lower_bound();
        let upper = self.upper_bound();
        (lower.x..=upper.x).contains(&position.x) && (lower.y..=upper.y).contains(&position.y)
    }
}
