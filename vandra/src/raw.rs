//! Raw element records: the input side of a traversal.
//!
//! Path implementations store their elements in some native encoding,
//! typically a tag plus a small buffer of points. The [`ElementSource`]
//! trait exposes that encoding to the visitor without committing to any
//! particular path type.

use core::{fmt, slice};

use kurbo::{BezPath, PathEl, Point};

use crate::element::{ElementPoints, PathElement};

/// Tag identifying the kind of a raw element record.
///
/// The values of the known tags follow the element type order used by
/// CoreGraphics. Any other value is unsupported and fails traversal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct RawTag(pub u8);

impl RawTag {
    /// Start a new subpath at one point.
    pub const MOVE_TO: Self = Self(0);
    /// Straight line to one point.
    pub const LINE_TO: Self = Self(1);
    /// Quadratic curve through a control point to an end point.
    pub const QUAD_TO: Self = Self(2);
    /// Cubic curve through two control points to an end point.
    pub const CURVE_TO: Self = Self(3);
    /// Close the current subpath; carries no points.
    pub const CLOSE_PATH: Self = Self(4);

    /// Returns the numeric value of the tag.
    pub const fn to_u8(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RawTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// A single native element record.
///
/// `points` holds whatever the source supplied for this record, which may be
/// more or fewer points than the tag calls for. Decoding reads exactly the
/// number the kind requires.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RawElement {
    pub tag: RawTag,
    pub points: ElementPoints,
}

impl RawElement {
    /// Creates a record, keeping at most the first three points.
    pub fn new(tag: RawTag, points: &[Point]) -> Self {
        Self {
            tag,
            points: ElementPoints::from_slice(points),
        }
    }
}

/// Anything that can enumerate its elements as raw records.
///
/// Records must be produced in the order the elements were appended to the
/// path. Enumeration only borrows the source, so a path cannot change while
/// it is being traversed.
pub trait ElementSource {
    /// Iterator over the raw records of this source.
    type RawElements<'a>: Iterator<Item = RawElement>
    where
        Self: 'a;

    /// Returns an iterator over the raw records of this source.
    fn raw_elements(&self) -> Self::RawElements<'_>;
}

impl<S: ElementSource + ?Sized> ElementSource for &S {
    type RawElements<'a>
        = S::RawElements<'a>
    where
        Self: 'a;

    fn raw_elements(&self) -> Self::RawElements<'_> {
        (**self).raw_elements()
    }
}

/// Records of a slice of `kurbo` path elements.
#[derive(Clone, Debug)]
pub struct KurboRecords<'a>(slice::Iter<'a, PathEl>);

impl Iterator for KurboRecords<'_> {
    type Item = RawElement;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|el| PathElement::from(*el).to_raw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for KurboRecords<'_> {}

impl ElementSource for [PathEl] {
    type RawElements<'a> = KurboRecords<'a>;

    fn raw_elements(&self) -> Self::RawElements<'_> {
        KurboRecords(self.iter())
    }
}

impl ElementSource for BezPath {
    type RawElements<'a> = KurboRecords<'a>;

    fn raw_elements(&self) -> Self::RawElements<'_> {
        self.elements().raw_elements()
    }
}

/// Records of a slice of previously visited elements.
#[derive(Clone, Debug)]
pub struct ElementRecords<'a>(slice::Iter<'a, PathElement>);

impl Iterator for ElementRecords<'_> {
    type Item = RawElement;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(PathElement::to_raw)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for ElementRecords<'_> {}

impl ElementSource for [PathElement] {
    type RawElements<'a> = ElementRecords<'a>;

    fn raw_elements(&self) -> Self::RawElements<'_> {
        ElementRecords(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kurbo_records_keep_order_and_tags() {
        let path = BezPath::from_svg("M0,0 L10,0 Q10,10 5,15 C1,2 3,4 5,6 Z").unwrap();
        let tags = path
            .raw_elements()
            .map(|raw| raw.tag)
            .collect::<Vec<_>>();
        assert_eq!(
            tags,
            [
                RawTag::MOVE_TO,
                RawTag::LINE_TO,
                RawTag::QUAD_TO,
                RawTag::CURVE_TO,
                RawTag::CLOSE_PATH
            ]
        );
        let quad = path.raw_elements().nth(2).unwrap();
        assert_eq!(
            quad.points.as_slice(),
            &[Point::new(10.0, 10.0), Point::new(5.0, 15.0)]
        );
    }

    #[test]
    fn raw_element_keeps_at_most_three_points() {
        let raw = RawElement::new(RawTag::CURVE_TO, &[Point::ZERO; 4]);
        assert_eq!(raw.points.len(), 3);
    }

    #[test]
    fn references_are_sources() {
        let path = BezPath::from_svg("M0,0 L10,0 Z").unwrap();
        let by_ref = &path;
        assert_eq!(
            (&by_ref).raw_elements().collect::<Vec<_>>(),
            path.raw_elements().collect::<Vec<_>>()
        );
        let mut visited: Vec<PathElement> = vec![];
        crate::visit::for_each_element(&&path, |el| visited.push(el)).unwrap();
        assert_eq!(visited.len(), 3);
        let els: &[PathEl] = path.elements();
        assert_eq!(crate::visit::element_count(&els), Ok(3));
    }

    #[test]
    fn tag_display() {
        assert_eq!(RawTag(7).to_string(), "0x07");
        assert_eq!(RawTag::CLOSE_PATH.to_string(), "0x04");
    }
}
