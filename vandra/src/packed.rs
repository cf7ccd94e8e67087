//! Packed verb and point buffers.

use core::slice;

use kurbo::{BezPath, Point};

use crate::{
    element::{ElementKind, PathElement},
    raw::{ElementSource, RawElement, RawTag},
};

/// A path stored as a buffer of verb bytes and a shared buffer of points.
///
/// This is the layout most native graphics libraries use internally: each
/// verb is a [`RawTag`] and consumes the next `point_count` points of the
/// point buffer. Paths built with the methods on this type are always well
/// formed. Paths created with [`PackedPath::from_raw_parts`] are not checked
/// and may contain unknown verbs or too few points; those errors are
/// reported when the path is traversed.
#[derive(Clone, Default, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedPath {
    verbs: Vec<u8>,
    points: Vec<Point>,
}

impl PackedPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from existing buffers without validating them.
    pub fn from_raw_parts(verbs: Vec<u8>, points: Vec<Point>) -> Self {
        Self { verbs, points }
    }

    /// Returns the verb bytes, one per element.
    pub fn verbs(&self) -> &[u8] {
        &self.verbs
    }

    /// Returns the point buffer shared by all elements.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns true if the path has no elements.
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Begin a new subpath at `p`.
    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.push(ElementKind::MoveTo, &[p.into()]);
    }

    /// Add a line to `p`.
    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.push(ElementKind::LineTo, &[p.into()]);
    }

    /// Add a quadratic bezier with control point `p1` ending at `p2`.
    pub fn quad_to(&mut self, p1: impl Into<Point>, p2: impl Into<Point>) {
        self.push(ElementKind::QuadTo, &[p1.into(), p2.into()]);
    }

    /// Add a cubic bezier with control points `p1` and `p2` ending at `p3`.
    pub fn curve_to(&mut self, p1: impl Into<Point>, p2: impl Into<Point>, p3: impl Into<Point>) {
        self.push(ElementKind::CurveTo, &[p1.into(), p2.into(), p3.into()]);
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) {
        self.push(ElementKind::ClosePath, &[]);
    }

    /// Appends an element.
    pub fn push_element(&mut self, element: PathElement) {
        self.push(element.kind(), &element.points());
    }

    fn push(&mut self, kind: ElementKind, points: &[Point]) {
        debug_assert_eq!(points.len(), kind.point_count());
        self.verbs.push(kind.tag().to_u8());
        self.points.extend_from_slice(points);
    }
}

impl From<&BezPath> for PackedPath {
    fn from(path: &BezPath) -> Self {
        let mut packed = PackedPath::new();
        for el in path.iter() {
            packed.push_element(el.into());
        }
        packed
    }
}

impl FromIterator<PathElement> for PackedPath {
    fn from_iter<T: IntoIterator<Item = PathElement>>(iter: T) -> Self {
        let mut packed = PackedPath::new();
        for element in iter {
            packed.push_element(element);
        }
        packed
    }
}

/// Records of a [`PackedPath`].
///
/// Each record receives as many points as its verb needs, or whatever is
/// left when the point buffer runs short. Iteration stops after the first
/// record that cannot be decoded since the position in the point buffer is
/// unknown from then on.
#[derive(Clone, Debug)]
pub struct PackedRecords<'a> {
    verbs: slice::Iter<'a, u8>,
    points: &'a [Point],
    done: bool,
}

impl Iterator for PackedRecords<'_> {
    type Item = RawElement;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let tag = RawTag(*self.verbs.next()?);
        let Some(kind) = ElementKind::from_tag(tag) else {
            self.done = true;
            return Some(RawElement::new(tag, &[]));
        };
        let wanted = kind.point_count();
        let available = wanted.min(self.points.len());
        let (points, rest) = self.points.split_at(available);
        self.points = rest;
        self.done = available < wanted;
        Some(RawElement::new(tag, points))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.verbs.len()))
        }
    }
}

impl ElementSource for PackedPath {
    type RawElements<'a> = PackedRecords<'a>;

    fn raw_elements(&self) -> Self::RawElements<'_> {
        PackedRecords {
            verbs: self.verbs.iter(),
            points: &self.points,
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_layout() {
        let mut path = PackedPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.quad_to((10.0, 10.0), (5.0, 15.0));
        path.curve_to((1.0, 2.0), (3.0, 4.0), (5.0, 6.0));
        path.close_path();
        assert_eq!(path.verbs(), &[0, 1, 2, 3, 4]);
        assert_eq!(path.points().len(), 7);
        assert_eq!(path.points()[3], Point::new(5.0, 15.0));
    }

    #[test]
    fn converts_from_bezpath() {
        let bez = BezPath::from_svg("M1,2 L3,4 C5,6 7,8 9,10 Z").unwrap();
        let packed = PackedPath::from(&bez);
        assert_eq!(packed.verbs(), &[0, 1, 3, 4]);
        assert_eq!(
            packed.points(),
            &[
                Point::new(1.0, 2.0),
                Point::new(3.0, 4.0),
                Point::new(5.0, 6.0),
                Point::new(7.0, 8.0),
                Point::new(9.0, 10.0),
            ]
        );
    }

    #[test]
    fn records_stop_after_unknown_verb() {
        let path = PackedPath::from_raw_parts(vec![0, 9, 1], vec![Point::ZERO, Point::ZERO]);
        let records = path.raw_elements().collect::<Vec<_>>();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].tag, RawTag(9));
        assert!(records[1].points.is_empty());
    }

    #[test]
    fn records_hand_out_remaining_points_when_short() {
        let path = PackedPath::from_raw_parts(vec![0, 3, 1], vec![Point::ZERO, Point::ZERO]);
        let records = path.raw_elements().collect::<Vec<_>>();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].tag, RawTag::CURVE_TO);
        assert_eq!(records[1].points.len(), 1);
    }
}
