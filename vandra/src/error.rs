//! Error types associated with path traversal.

use thiserror::Error;

use crate::element::ElementKind;

/// Errors that can occur when decoding the raw records of a path.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VisitError {
    /// The record at this index carried a tag outside the known kinds.
    #[error("Unsupported path element tag {tag} at index {index}")]
    UnsupportedElement { index: usize, tag: u8 },
    /// The record at this index supplied fewer points than its kind needs.
    #[error("Path element {kind:?} at index {index} needs {expected} points but only {found} were supplied")]
    MissingPoints {
        index: usize,
        kind: ElementKind,
        expected: usize,
        found: usize,
    },
}

impl VisitError {
    /// Index of the record that failed to decode.
    pub fn index(&self) -> usize {
        match self {
            Self::UnsupportedElement { index, .. } | Self::MissingPoints { index, .. } => *index,
        }
    }
}
