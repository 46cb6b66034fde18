//! Axis-aligned ellipse given by a center and per-axis radii
//!
//! Membership is evaluated in exact integer arithmetic:
//! `dx² · ry² + dy² · rx² <= rx² · ry²`. An axis with zero radius collapses
//! the ellipse onto the other axis, so only positions with a zero offset on
//! that axis can belong.

use crate::geometry::Vector;

/// Ellipse containing every position within `radius` of `center`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EllipticRegion {
    /// Center position
    pub center: Vector,
    /// Non-negative radius per axis
    pub radius: Vector,
}

impl EllipticRegion {
    /// Create an ellipse; negative radii are taken by magnitude
    ///
    /// A radius component of `i32::MIN` is clamped to `i32::MAX`.
    pub const fn new(center: Vector, radius: Vector) -> Self {
        Self {
            center,
            radius: Vector::new(radius.x.saturating_abs(), radius.y.saturating_abs()),
        }
    }

    /// Lower corner of the bounding rectangle, clamped to the `i32` range
    pub const fn lower_bound(&self) -> Vector {
        self.center.saturating_sub(self.radius)
    }

    /// Upper corner of the bounding rectangle, clamped to the `i32` range
    pub const fn upper_bound(&self) -> Vector {
        self.center.saturating_add(self.radius)
    }

    /// Test whether `position` lies inside or on the ellipse
    pub fn contains(&self, position: Vector) -> bool {
        let dx = i128::from(position.x) - i128::from(self.center.x);
        let dy = i128::from(position.y) - i128::from(self.center.y);
        let rx = i128::from(self.radius.x);
        let ry = i128::from(self.radius.y);

        match (rx, ry) {
            (0, 0) => dx == 0 && dy == 0,
            (0, _) => dx == 0 && dy.abs() <= ry,
            (_, 0) => dy == 0 && dx.abs() <= rx,
            _ => {
                let (rx2, ry2) = (rx * rx, ry * ry);
                dx * dx * ry2 + dy * dy * rx2 <= rx2 * ry2
            }
        }
    }
}
