//! Ordered traversal of path elements.

use core::iter::FusedIterator;

use crate::{
    element::{ElementKind, PathElement},
    error::VisitError,
    raw::{ElementSource, RawElement},
};

/// Interface for accepting a sequence of path elements.
pub trait PathVisitor {
    /// Receive the next element of the path.
    fn visit(&mut self, element: PathElement);
}

/// Invokes `callback` once for each element of `path`, in the order the
/// elements were appended to the path.
///
/// Every record is decoded before the first call, so a path containing an
/// unsupported or truncated record produces an error without invoking the
/// callback at all. An empty path is valid and invokes the callback zero
/// times.
///
/// # Examples
///
/// ```
/// use vandra::{for_each_element, kurbo::BezPath, PathElement};
///
/// let mut path = BezPath::new();
/// path.move_to((0.0, 0.0));
/// path.line_to((10.0, 0.0));
/// path.close_path();
///
/// let mut kinds = vec![];
/// for_each_element(&path, |el: PathElement| kinds.push(el.kind())).unwrap();
/// assert_eq!(kinds.len(), 3);
/// ```
pub fn for_each_element<S, F>(path: &S, mut callback: F) -> Result<(), VisitError>
where
    S: ElementSource + ?Sized,
    F: FnMut(PathElement),
{
    let count = element_count(path)?;
    log::trace!("visiting {count} path elements");
    // every record was validated above, so decoding can no longer fail here
    for (index, raw) in path.raw_elements().enumerate() {
        callback(decode(index, &raw)?);
    }
    Ok(())
}

/// Like [`for_each_element`] but with a fallible callback.
///
/// The first error returned by `callback` ends the traversal and is handed
/// back to the caller unchanged. Decoding errors are converted into `E`.
pub fn try_for_each_element<S, F, E>(path: &S, mut callback: F) -> Result<(), E>
where
    S: ElementSource + ?Sized,
    F: FnMut(PathElement) -> Result<(), E>,
    E: From<VisitError>,
{
    let count = element_count(path)?;
    log::trace!("visiting {count} path elements");
    // the first pass only validates; only `callback` can fail from here on
    for (index, raw) in path.raw_elements().enumerate() {
        callback(decode(index, &raw)?)?;
    }
    Ok(())
}

/// Feeds every element of `path` to `visitor`.
pub fn visit_path<S, V>(path: &S, visitor: &mut V) -> Result<(), VisitError>
where
    S: ElementSource + ?Sized,
    V: PathVisitor + ?Sized,
{
    for_each_element(path, |element| visitor.visit(element))
}

/// Returns the number of structural elements in `path`.
///
/// Fails with the same errors as [`for_each_element`].
pub fn element_count<S>(path: &S) -> Result<usize, VisitError>
where
    S: ElementSource + ?Sized,
{
    let mut count = 0;
    for (index, raw) in path.raw_elements().enumerate() {
        decode(index, &raw)?;
        count += 1;
    }
    Ok(count)
}

/// Returns a lazy iterator over the elements of `path`.
///
/// Records are decoded one at a time, so elements preceding a malformed
/// record are yielded before the error. The iterator ends after the first
/// error.
pub fn elements<S>(path: &S) -> Elements<'_, S>
where
    S: ElementSource + ?Sized,
{
    Elements {
        records: path.raw_elements(),
        index: 0,
        failed: false,
    }
}

/// Iterator returned by [`elements`].
pub struct Elements<'a, S>
where
    S: ElementSource + ?Sized + 'a,
{
    records: S::RawElements<'a>,
    index: usize,
    failed: bool,
}

impl<'a, S> Iterator for Elements<'a, S>
where
    S: ElementSource + ?Sized + 'a,
{
    type Item = Result<PathElement, VisitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let raw = self.records.next()?;
        let result = decode(self.index, &raw);
        self.index += 1;
        self.failed = result.is_err();
        Some(result)
    }
}

impl<'a, S> FusedIterator for Elements<'a, S> where S: ElementSource + ?Sized + 'a {}

/// Maps one raw record to a typed element.
fn decode(index: usize, raw: &RawElement) -> Result<PathElement, VisitError> {
    let Some(kind) = ElementKind::from_tag(raw.tag) else {
        log::warn!("unsupported path element tag {} at index {index}", raw.tag);
        return Err(VisitError::UnsupportedElement {
            index,
            tag: raw.tag.to_u8(),
        });
    };
    PathElement::from_parts(kind, &raw.points).ok_or_else(|| {
        log::warn!(
            "path element {kind:?} at index {index} has {} of {} points",
            raw.points.len(),
            kind.point_count()
        );
        VisitError::MissingPoints {
            index,
            kind,
            expected: kind.point_count(),
            found: raw.points.len(),
        }
    })
}
