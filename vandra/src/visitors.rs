//! Common visitors for collecting the output of a traversal.

use core::fmt::{self, Write};

use kurbo::{BezPath, Point};

use crate::{element::PathElement, visit::PathVisitor};

impl PathVisitor for Vec<PathElement> {
    fn visit(&mut self, element: PathElement) {
        self.push(element)
    }
}

/// Replays the visited elements into the path.
impl PathVisitor for BezPath {
    fn visit(&mut self, element: PathElement) {
        self.push(element.into())
    }
}

/// Visitor that drops all elements into the ether.
pub struct NullVisitor;

impl PathVisitor for NullVisitor {
    fn visit(&mut self, _element: PathElement) {}
}

/// Visitor that generates SVG style path data.
#[derive(Clone, Default, Debug)]
pub struct SvgVisitor(String, Option<usize>);

impl SvgVisitor {
    /// Creates a new SVG visitor that formats floating point values with the
    /// standard behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new SVG visitor with the given precision (the number of
    /// digits that will be printed after the decimal).
    pub fn with_precision(precision: usize) -> Self {
        Self(String::default(), Some(precision))
    }

    /// Clears the content of the internal string.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    fn maybe_push_space(&mut self) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
    }

    fn push_point(&mut self, p: Point) {
        let _ = if let Some(prec) = self.1 {
            write!(self.0, "{:.2$},{:.2$}", p.x, p.y, prec)
        } else {
            write!(self.0, "{},{}", p.x, p.y)
        };
    }

    fn push_command(&mut self, command: char, points: &[Point]) {
        self.maybe_push_space();
        self.0.push(command);
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                self.0.push(' ');
            }
            self.push_point(*p);
        }
    }
}

impl PathVisitor for SvgVisitor {
    fn visit(&mut self, element: PathElement) {
        let command = match element {
            PathElement::MoveTo(..) => 'M',
            PathElement::LineTo(..) => 'L',
            PathElement::QuadTo(..) => 'Q',
            PathElement::CurveTo(..) => 'C',
            PathElement::ClosePath => 'Z',
        };
        self.push_command(command, &element.points());
    }
}

impl core::ops::Deref for SvgVisitor {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl AsRef<str> for SvgVisitor {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<SvgVisitor> for String {
    fn from(value: SvgVisitor) -> Self {
        value.0
    }
}

impl fmt::Display for SvgVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visitor that samples the on-curve end point of every element.
///
/// A point is skipped when it lies closer than `min_distance` to the last
/// point that was kept. Close elements have no end point and are ignored.
#[derive(Clone, Debug)]
pub struct EndPoints {
    points: Vec<Point>,
    min_distance: f64,
}

impl EndPoints {
    /// Creates an empty sampler with the given spacing.
    pub fn new(min_distance: f64) -> Self {
        Self {
            points: vec![],
            min_distance,
        }
    }

    /// Returns the points kept so far.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the sampler, returning the kept points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Default for EndPoints {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl PathVisitor for EndPoints {
    fn visit(&mut self, element: PathElement) {
        let Some(point) = element.end_point() else {
            return;
        };
        if let Some(last) = self.points.last() {
            if last.distance(point) < self.min_distance {
                return;
            }
        }
        self.points.push(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visit::visit_path;

    fn scenario_path() -> BezPath {
        BezPath::from_svg("M0,0 L10,0 Q10,10 5,15 Z").unwrap()
    }

    #[test]
    fn svg_output() {
        let mut svg = SvgVisitor::new();
        visit_path(&scenario_path(), &mut svg).unwrap();
        assert_eq!(svg.to_string(), "M0,0 L10,0 Q10,10 5,15 Z");
    }

    #[test]
    fn svg_precision() {
        let path = BezPath::from_svg(
            "M1,2.45556 L1.2,4 Q2.0345,3.56789 -0.157,-425.07 C-37.001,4.5 2,1 -0.5,-0.25 Z",
        )
        .unwrap();
        let svg_data = [None, Some(1), Some(4)].map(|prec| {
            let mut svg = match prec {
                None => SvgVisitor::new(),
                Some(prec) => SvgVisitor::with_precision(prec),
            };
            visit_path(&path, &mut svg).unwrap();
            svg.to_string()
        });
        let expected = [
            "M1,2.45556 L1.2,4 Q2.0345,3.56789 -0.157,-425.07 C-37.001,4.5 2,1 -0.5,-0.25 Z",
            "M1.0,2.5 L1.2,4.0 Q2.0,3.6 -0.2,-425.1 C-37.0,4.5 2.0,1.0 -0.5,-0.2 Z",
            "M1.0000,2.4556 L1.2000,4.0000 Q2.0345,3.5679 -0.1570,-425.0700 C-37.0010,4.5000 2.0000,1.0000 -0.5000,-0.2500 Z",
        ];
        for (result, expected) in svg_data.iter().zip(&expected) {
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn svg_clear() {
        let mut svg = SvgVisitor::new();
        visit_path(&scenario_path(), &mut svg).unwrap();
        svg.clear();
        assert!(svg.is_empty());
        svg.visit(PathElement::ClosePath);
        assert_eq!(String::from(svg), "Z");
    }

    #[test]
    fn rebuild_round_trip() {
        let original =
            BezPath::from_svg("M0,0 C1,2 3,4 5,6 L7,8 Q9,10 11,12 Z M20,20 L30,30").unwrap();
        let mut rebuilt = BezPath::new();
        visit_path(&original, &mut rebuilt).unwrap();
        assert_eq!(rebuilt.elements(), original.elements());
    }

    #[test]
    fn record_elements() {
        let mut recorded: Vec<PathElement> = vec![];
        visit_path(&scenario_path(), &mut recorded).unwrap();
        assert_eq!(recorded.len(), 4);
        assert_eq!(recorded[3], PathElement::ClosePath);
        visit_path(&scenario_path(), &mut NullVisitor).unwrap();
    }

    #[test]
    fn end_points_skip_close_and_near_points() {
        let path = BezPath::from_svg("M0,0 L0.05,0 L1,0 C2,2 3,3 1,0.01 Q5,5 6,6 Z").unwrap();
        let mut all = EndPoints::default();
        visit_path(&path, &mut all).unwrap();
        assert_eq!(all.points().len(), 5);

        let mut spaced = EndPoints::new(0.1);
        visit_path(&path, &mut spaced).unwrap();
        assert_eq!(
            spaced.into_points(),
            [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(6.0, 6.0)]
        );
    }
}
