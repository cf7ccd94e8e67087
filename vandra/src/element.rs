//! Typed path elements.

use core::{fmt, ops::Deref};

use kurbo::{PathEl, Point};

use crate::raw::{RawElement, RawTag};

/// Maximum number of points carried by a single path element.
pub const MAX_ELEMENT_POINTS: usize = 3;

/// The kind of a structural path element.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
// clippy doesn't like the common To suffix
#[allow(clippy::enum_variant_names)]
pub enum ElementKind {
    /// Begin a new subpath.
    MoveTo,
    /// Straight line from the current point.
    LineTo,
    /// Quadratic bezier from the current point.
    QuadTo,
    /// Cubic bezier from the current point.
    CurveTo,
    /// Close the current subpath.
    ClosePath,
}

impl ElementKind {
    /// Returns the number of points an element of this kind carries.
    pub const fn point_count(self) -> usize {
        match self {
            Self::MoveTo | Self::LineTo => 1,
            Self::QuadTo => 2,
            Self::CurveTo => 3,
            Self::ClosePath => 0,
        }
    }

    /// Returns the raw tag used to encode this kind.
    pub const fn tag(self) -> RawTag {
        match self {
            Self::MoveTo => RawTag::MOVE_TO,
            Self::LineTo => RawTag::LINE_TO,
            Self::QuadTo => RawTag::QUAD_TO,
            Self::CurveTo => RawTag::CURVE_TO,
            Self::ClosePath => RawTag::CLOSE_PATH,
        }
    }

    /// Maps a raw tag to an element kind.
    ///
    /// Returns `None` if the tag does not name one of the five supported
    /// kinds.
    pub const fn from_tag(tag: RawTag) -> Option<Self> {
        Some(match tag {
            RawTag::MOVE_TO => Self::MoveTo,
            RawTag::LINE_TO => Self::LineTo,
            RawTag::QUAD_TO => Self::QuadTo,
            RawTag::CURVE_TO => Self::CurveTo,
            RawTag::CLOSE_PATH => Self::ClosePath,
            _ => return None,
        })
    }
}

/// Single structural element of a path.
///
/// Elements are plain values: copy one out of a traversal callback if you
/// need it after the callback returns.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::enum_variant_names)]
pub enum PathElement {
    /// Begin a new subpath at the given point.
    MoveTo(Point),
    /// Draw a line from the current point to the given point.
    LineTo(Point),
    /// Draw a quadratic bezier from the current point with a control point
    /// at the first point and ending at the second.
    QuadTo(Point, Point),
    /// Draw a cubic bezier from the current point with control points at
    /// the first two points and ending at the third.
    CurveTo(Point, Point, Point),
    /// Close the current subpath.
    ClosePath,
}

impl PathElement {
    /// Returns the kind of this element.
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::MoveTo(..) => ElementKind::MoveTo,
            Self::LineTo(..) => ElementKind::LineTo,
            Self::QuadTo(..) => ElementKind::QuadTo,
            Self::CurveTo(..) => ElementKind::CurveTo,
            Self::ClosePath => ElementKind::ClosePath,
        }
    }

    /// Returns the points of this element in path order: control points
    /// first, destination last.
    ///
    /// The number of points always equals `self.kind().point_count()`.
    pub fn points(&self) -> ElementPoints {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => ElementPoints::from_slice(&[p]),
            Self::QuadTo(c0, p) => ElementPoints::from_slice(&[c0, p]),
            Self::CurveTo(c0, c1, p) => ElementPoints::from_slice(&[c0, c1, p]),
            Self::ClosePath => ElementPoints::new(),
        }
    }

    /// Returns the on-curve point this element ends at, or `None` for
    /// [`PathElement::ClosePath`].
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::QuadTo(_, p) | Self::CurveTo(_, _, p) => {
                Some(p)
            }
            Self::ClosePath => None,
        }
    }

    /// Builds an element of the given kind from the leading points of
    /// `points`.
    ///
    /// Exactly `kind.point_count()` points are read; any further points are
    /// ignored. Returns `None` if too few points are supplied.
    pub fn from_parts(kind: ElementKind, points: &[Point]) -> Option<Self> {
        Some(match (kind, points) {
            (ElementKind::MoveTo, [p, ..]) => Self::MoveTo(*p),
            (ElementKind::LineTo, [p, ..]) => Self::LineTo(*p),
            (ElementKind::QuadTo, [c0, p, ..]) => Self::QuadTo(*c0, *p),
            (ElementKind::CurveTo, [c0, c1, p, ..]) => Self::CurveTo(*c0, *c1, *p),
            (ElementKind::ClosePath, _) => Self::ClosePath,
            _ => return None,
        })
    }

    /// Encodes this element as a raw record.
    pub fn to_raw(&self) -> RawElement {
        RawElement {
            tag: self.kind().tag(),
            points: self.points(),
        }
    }
}

impl From<PathEl> for PathElement {
    fn from(el: PathEl) -> Self {
        match el {
            PathEl::MoveTo(p) => Self::MoveTo(p),
            PathEl::LineTo(p) => Self::LineTo(p),
            PathEl::QuadTo(c0, p) => Self::QuadTo(c0, p),
            PathEl::CurveTo(c0, c1, p) => Self::CurveTo(c0, c1, p),
            PathEl::ClosePath => Self::ClosePath,
        }
    }
}

impl From<PathElement> for PathEl {
    fn from(element: PathElement) -> Self {
        match element {
            PathElement::MoveTo(p) => Self::MoveTo(p),
            PathElement::LineTo(p) => Self::LineTo(p),
            PathElement::QuadTo(c0, p) => Self::QuadTo(c0, p),
            PathElement::CurveTo(c0, c1, p) => Self::CurveTo(c0, c1, p),
            PathElement::ClosePath => Self::ClosePath,
        }
    }
}

/// Inline storage for the points of a single element.
///
/// Holds at most [`MAX_ELEMENT_POINTS`] points and dereferences to a slice
/// of exactly the points that are present.
#[derive(Copy, Clone)]
pub struct ElementPoints {
    storage: [Point; MAX_ELEMENT_POINTS],
    len: u8,
}

impl ElementPoints {
    /// Creates an empty set of points.
    pub const fn new() -> Self {
        Self {
            storage: [Point::ZERO; MAX_ELEMENT_POINTS],
            len: 0,
        }
    }

    /// Copies up to [`MAX_ELEMENT_POINTS`] leading points from the given
    /// slice.
    pub fn from_slice(points: &[Point]) -> Self {
        let len = points.len().min(MAX_ELEMENT_POINTS);
        let mut storage = [Point::ZERO; MAX_ELEMENT_POINTS];
        storage[..len].copy_from_slice(&points[..len]);
        Self {
            storage,
            len: len as u8,
        }
    }

    /// Returns the stored points.
    pub fn as_slice(&self) -> &[Point] {
        &self.storage[..self.len as usize]
    }
}

impl Default for ElementPoints {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for ElementPoints {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl PartialEq for ElementPoints {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for ElementPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
