//! Two-point selection that turns user clicks into a region
//!
//! A selector is a value: `with_primary`, `with_secondary` and `clear` return
//! a new selector and leave the original untouched. It yields
//! [`Region::Empty`] until both points are set.

use std::fmt;
use std::str::FromStr;

use crate::geometry::Vector;
use crate::io::error::{EditError, invalid_argument};
use crate::region::{EllipticRegion, RectangularRegion, Region};

/// Geometry rule turning the two points into a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectorKind {
    /// Rectangle with the two points as opposite corners
    #[default]
    Rectangular,
    /// Ellipse centered on the first point, reaching the second
    Elliptic,
}

/// How many of the two points have been supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Neither point is set
    NoPoints,
    /// Exactly one point is set
    OnePoint,
    /// Both points are set and a region can be built
    TwoPoints,
}

/// Immutable accumulator of a primary and secondary point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionSelector {
    kind: SelectorKind,
    position1: Option<Vector>,
    position2: Option<Vector>,
}

impl RegionSelector {
    /// Create a selector of `kind` with no points set
    pub const fn new(kind: SelectorKind) -> Self {
        Self {
            kind,
            position1: None,
            position2: None,
        }
    }

    /// Create a rectangular selector with no points set
    pub const fn rectangular() -> Self {
        Self::new(SelectorKind::Rectangular)
    }

    /// Create an elliptic selector with no points set
    pub const fn elliptic() -> Self {
        Self::new(SelectorKind::Elliptic)
    }

    /// Create a selector of `kind` with the given points
    pub const fn with_positions(
        kind: SelectorKind,
        position1: Option<Vector>,
        position2: Option<Vector>,
    ) -> Self {
        Self {
            kind,
            position1,
            position2,
        }
    }

    /// Geometry rule of this selector
    pub const fn kind(&self) -> SelectorKind {
        self.kind
    }

    /// First point, set by a primary click
    pub const fn position1(&self) -> Option<Vector> {
        self.position1
    }

    /// Second point, set by a secondary click
    pub const fn position2(&self) -> Option<Vector> {
        self.position2
    }

    /// Point that pastes and other anchored operations use
    pub const fn primary_position(&self) -> Option<Vector> {
        self.position1
    }

    /// Number of points supplied so far
    pub const fn state(&self) -> SelectionState {
        match (self.position1, self.position2) {
            (None, None) => SelectionState::NoPoints,
            (Some(_), None) | (None, Some(_)) => SelectionState::OnePoint,
            (Some(_), Some(_)) => SelectionState::TwoPoints,
        }
    }

    /// Copy with the first point replaced
    #[must_use]
    pub const fn with_primary(self, position: Vector) -> Self {
        Self {
            position1: Some(position),
            ..self
        }
    }

    /// Copy with the second point replaced
    #[must_use]
    pub const fn with_secondary(self, position: Vector) -> Self {
        Self {
            position2: Some(position),
            ..self
        }
    }

    /// Copy of the same kind with both points unset
    #[must_use]
    pub const fn clear(self) -> Self {
        Self::new(self.kind)
    }

    /// Copy of a different kind keeping both points
    #[must_use]
    pub const fn with_kind(self, kind: SelectorKind) -> Self {
        Self { kind, ..self }
    }

    /// Region described by the two points, or [`Region::Empty`] if either is unset
    pub fn region(&self) -> Region {
        let (Some(position1), Some(position2)) = (self.position1, self.position2) else {
            return Region::Empty;
        };
        match self.kind {
            SelectorKind::Rectangular => RectangularRegion::new(position1, position2).into(),
            SelectorKind::Elliptic => {
                EllipticRegion::new(position1, position1.abs_diff(position2)).into()
            }
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangular => write!(f, "rect"),
            Self::Elliptic => write!(f, "ellipse"),
        }
    }
}

/// Parses `rect`/`rectangle` or `ellipse`/`elliptic`
impl FromStr for SelectorKind {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rect" | "rectangle" | "rectangular" => Ok(Self::Rectangular),
            "ellipse" | "elliptic" => Ok(Self::Elliptic),
            _ => Err(invalid_argument(
                "shape",
                &s,
                &"expected `rect` or `ellipse`",
            )),
        }
    }
}
