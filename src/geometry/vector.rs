//! Two-dimensional integer coordinate used for positions, offsets and radii

use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::io::error::{EditError, invalid_argument};

/// Grid coordinate or offset
///
/// Value type: every operation returns a new vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    /// Column component
    pub x: i32,
    /// Row component
    pub y: i32,
}

impl Vector {
    /// The origin `(0, 0)`
    pub const ZERO: Self = Self::new(0, 0);
    /// The unit vector `(1, 1)`
    pub const ONE: Self = Self::new(1, 1);

    /// Create a vector from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise absolute value
    #[must_use]
    pub const fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Component-wise distance to `other`, clamped to `i32::MAX`
    #[must_use]
    pub fn abs_diff(self, other: Self) -> Self {
        let clamp = |distance: u32| i32::try_from(distance).unwrap_or(i32::MAX);
        Self::new(
            clamp(self.x.abs_diff(other.x)),
            clamp(self.y.abs_diff(other.y)),
        )
    }

    /// Component-wise sum, or `None` if either component overflows
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self.x.checked_add(rhs.x), self.y.checked_add(rhs.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Component-wise difference, or `None` if either component overflows
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match (self.x.checked_sub(rhs.x), self.y.checked_sub(rhs.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Component-wise sum clamped to the `i32` range
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }

    /// Component-wise difference clamped to the `i32` range
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }

    /// Component-wise minimum
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses the `x,y` form used on the command line
impl FromStr for Vector {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| invalid_argument("vector", &s, &"expected `x,y`"))?;
        let x = x
            .trim()
            .parse()
            .map_err(|e| invalid_argument("vector", &s, &e))?;
        let y = y
            .trim()
            .parse()
            .map_err(|e| invalid_argument("vector", &s, &e))?;
        Ok(Self::new(x, y))
    }
}
