//! Mask combinators and their evaluation

use crate::extent::Extent;
use crate::geometry::Vector;
use crate::region::Region;
use crate::tile::Template;

/// Predicate deciding whether a position may be written
#[derive(Debug, Default)]
pub enum Mask {
    /// Accepts every position
    #[default]
    Always,
    /// Accepts exactly what the inner mask rejects
    Negated(Box<Mask>),
    /// Accepts positions inside the region, ignoring tile content
    Region(Region),
    /// Accepts positions whose current tile matches the template
    Template(Box<dyn Template>),
}

impl Mask {
    /// Mask accepting what `mask` rejects
    #[must_use]
    pub fn negated(mask: Self) -> Self {
        Self::Negated(Box::new(mask))
    }

    /// Mask accepting positions inside `region`
    pub const fn region(region: Region) -> Self {
        Self::Region(region)
    }

    /// Mask accepting positions whose tile matches `template`
    pub fn template(template: impl Template + 'static) -> Self {
        Self::Template(Box::new(template))
    }

    /// Evaluate the predicate at `position` of `extent`
    pub fn test<E: Extent + ?Sized>(&self, extent: &E, position: Vector) -> bool {
        match self {
            Self::Always => true,
            Self::Negated(inner) => !inner.test(extent, position),
            Self::Region(region) => region.contains(position),
            Self::Template(template) => template.matches(&extent.tile(position)),
        }
    }
}
