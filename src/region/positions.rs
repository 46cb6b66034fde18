//! Lazy row-major enumeration of region members

use crate::geometry::Vector;
use crate::region::Region;

/// Walks every position of an inclusive rectangle, `x` fastest
#[derive(Debug, Clone)]
pub struct RectanglePositions {
    lower: Vector,
    upper: Vector,
    next: Option<Vector>,
}

impl RectanglePositions {
    /// Walk the rectangle between `lower` and `upper`, inclusive
    ///
    /// Yields nothing when `lower` exceeds `upper` on either axis.
    pub const fn new(lower: Vector, upper: Vector) -> Self {
        let next = if lower.x <= upper.x && lower.y <= upper.y {
            Some(lower)
        } else {
            None
        };
        Self { lower, upper, next }
    }

    const fn empty() -> Self {
        Self {
            lower: Vector::ZERO,
            upper: Vector::ZERO,
            next: None,
        }
    }
}

impl Iterator for RectanglePositions {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        let current = self.next?;
        self.next = if current.x < self.upper.x {
            Some(Vector::new(current.x + 1, current.y))
        } else if current.y < self.upper.y {
            Some(Vector::new(self.lower.x, current.y + 1))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(next) = self.next else {
            return (0, Some(0));
        };
        let width = i128::from(self.upper.x) - i128::from(self.lower.x) + 1;
        let full_rows = i128::from(self.upper.y) - i128::from(next.y);
        let current_row = i128::from(self.upper.x) - i128::from(next.x) + 1;
        let remaining = usize::try_from(full_rows * width + current_row).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Member positions of a [`Region`]
///
/// Rectangles are walked directly; other shapes walk their bounding
/// rectangle and keep only the positions the region contains.
#[derive(Debug, Clone)]
pub struct Positions {
    walk: RectanglePositions,
    filter: Option<Region>,
}

impl Positions {
    pub(crate) const fn empty() -> Self {
        Self {
            walk: RectanglePositions::empty(),
            filter: None,
        }
    }

    pub(crate) const fn rectangle(lower: Vector, upper: Vector) -> Self {
        Self {
            walk: RectanglePositions::new(lower, upper),
            filter: None,
        }
    }

    pub(crate) const fn filtered(region: Region, lower: Vector, upper: Vector) -> Self {
        Self {
            walk: RectanglePositions::new(lower, upper),
            filter: Some(region),
        }
    }
}

impl Iterator for Positions {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        match &self.filter {
            None => self.walk.next(),
            Some(region) => self.walk.by_ref().find(|&position| region.contains(position)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.walk.size_hint();
        if self.filter.is_some() {
            (0, upper)
        } else {
            (lower, upper)
        }
    }
}
