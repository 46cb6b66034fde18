//! Finite position sets with containment tests and lazy enumeration
//!
//! Regions are a closed set of shapes. Enumeration is row-major and lazy, so
//! arbitrarily large selections cost no more memory than the iterator state.

use crate::geometry::Vector;

/// Axis-aligned ellipse
pub mod elliptic;
/// Row-major walk over a rectangle, optionally filtered by a region
pub mod positions;
/// Axis-aligned rectangle between two corners
pub mod rectangular;
/// Two-point selection state machine
pub mod selector;

pub use elliptic::EllipticRegion;
pub use positions::{Positions, RectanglePositions};
pub use rectangular::RectangularRegion;
pub use selector::{RegionSelector, SelectionState, SelectorKind};

/// Finite, enumerable set of grid positions
///
/// `contains` agrees exactly with the positions yielded by `positions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    /// Contains nothing and enumerates nothing
    #[default]
    Empty,
    /// Every position between two corners, inclusive
    Rectangular(RectangularRegion),
    /// Every position inside an axis-aligned ellipse
    Elliptic(EllipticRegion),
}

impl Region {
    /// Test whether `position` belongs to the region
    pub fn contains(&self, position: Vector) -> bool {
        match self {
            Self::Empty => false,
            Self::Rectangular(region) => region.contains(position),
            Self::Elliptic(region) => region.contains(position),
        }
    }

    /// Inclusive bounding box as `(lower, upper)`, or `None` when empty
    pub fn bounds(&self) -> Option<(Vector, Vector)> {
        match self {
            Self::Empty => None,
            Self::Rectangular(region) => Some((region.lower_bound(), region.upper_bound())),
            Self::Elliptic(region) => Some((region.lower_bound(), region.upper_bound())),
        }
    }

    /// Inclusive lower corner of the bounding box
    pub fn lower_bound(&self) -> Option<Vector> {
        self.bounds().map(|(lower, _)| lower)
    }

    /// Lazily enumerate member positions in row-major order
    pub fn positions(&self) -> Positions {
        match self {
            Self::Empty => Positions::empty(),
            Self::Rectangular(region) => {
                Positions::rectangle(region.lower_bound(), region.upper_bound())
            }
            Self::Elliptic(region) => {
                Positions::filtered(*self, region.lower_bound(), region.upper_bound())
            }
        }
    }

    /// Lazily enumerate member positions inside the inclusive box `lower..=upper`
    ///
    /// Yields the same positions as filtering [`Region::positions`] by the box,
    /// in the same order, but only walks the overlap of the box with the
    /// region's bounding box.
    pub fn positions_within(&self, lower: Vector, upper: Vector) -> Positions {
        let Some((region_lower, region_upper)) = self.bounds() else {
            return Positions::empty();
        };
        let lower = lower.max(region_lower);
        let upper = upper.min(region_upper);
        match self {
            Self::Empty => Positions::empty(),
            Self::Rectangular(_) => Positions::rectangle(lower, upper),
            Self::Elliptic(_) => Positions::filtered(*self, lower, upper),
        }
    }

    /// Number of member positions
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Rectangular(region) => region.area(),
            Self::Elliptic(_) => self.positions().count(),
        }
    }

    /// Test whether the region has no member positions
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<RectangularRegion> for Region {
    fn from(region: RectangularRegion) -> Self {
        Self::Rectangular(region)
    }
}

impl From<EllipticRegion> for Region {
    fn from(region: EllipticRegion) -> Self {
        Self::Elliptic(region)
    }
}

impl IntoIterator for &Region {
    type Item = Vector;
    type IntoIter = Positions;

    fn into_iter(self) -> Positions {
        self.positions()
    }
}
