//! Ordered, typed traversal of vector path elements.
//!
//! Vandra walks the element list of an already built path and hands each
//! element to a visitor as a [`PathElement`]: a move, line, quadratic curve,
//! cubic curve or close command together with exactly the points that
//! command carries. Elements are delivered in the order they were appended
//! to the path and the path itself is only ever borrowed immutably.
//!
//! Paths come from anything implementing [`ElementSource`]. Implementations
//! are provided for [`kurbo::BezPath`], slices of [`kurbo::PathEl`] and
//! [`PackedPath`], a verb/point buffer encoding of the kind native graphics
//! libraries use.
//!
//! ```
//! use vandra::{for_each_element, kurbo::{BezPath, Point}, PathElement};
//!
//! let mut path = BezPath::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((10.0, 0.0));
//! path.quad_to((10.0, 10.0), (5.0, 15.0));
//! path.close_path();
//!
//! let mut elements = vec![];
//! for_each_element(&path, |el| elements.push(el)).unwrap();
//! assert_eq!(
//!     elements,
//!     [
//!         PathElement::MoveTo(Point::new(0.0, 0.0)),
//!         PathElement::LineTo(Point::new(10.0, 0.0)),
//!         PathElement::QuadTo(Point::new(10.0, 10.0), Point::new(5.0, 15.0)),
//!         PathElement::ClosePath,
//!     ]
//! );
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod element;
mod error;
mod packed;
mod raw;
mod track;
mod visit;
pub mod visitors;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

/// Expose the geometry crate our paths and points come from.
pub extern crate kurbo;

pub use element::{ElementKind, ElementPoints, PathElement, MAX_ELEMENT_POINTS};
pub use error::VisitError;
pub use packed::{PackedPath, PackedRecords};
pub use raw::{ElementRecords, ElementSource, KurboRecords, RawElement, RawTag};
pub use track::{Track, TrackError};
pub use visit::{
    element_count, elements, for_each_element, try_for_each_element, visit_path, Elements,
    PathVisitor,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_and_sync() {
        assert_send_sync::<ElementKind>();
        assert_send_sync::<ElementPoints>();
        assert_send_sync::<PathElement>();
        assert_send_sync::<RawTag>();
        assert_send_sync::<RawElement>();
        assert_send_sync::<PackedPath>();
        assert_send_sync::<PackedRecords<'static>>();
        assert_send_sync::<KurboRecords<'static>>();
        assert_send_sync::<ElementRecords<'static>>();
        assert_send_sync::<VisitError>();
        assert_send_sync::<Track>();
        assert_send_sync::<TrackError>();
        assert_send_sync::<visitors::NullVisitor>();
        assert_send_sync::<visitors::SvgVisitor>();
        assert_send_sync::<visitors::EndPoints>();
        assert_send_sync::<Elements<'static, PackedPath>>();
    }
}
