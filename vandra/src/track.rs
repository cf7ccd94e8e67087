//! Sampled tracks along a path.
//!
//! A [`Track`] is the ring of on-curve points of a path, as used by a knob
//! or slider whose handle follows the path. It offers stepping around the
//! ring, a local nearest point search and mapping of a sample position onto
//! an integer value range.

use core::ops::RangeInclusive;

use kurbo::{PathEl, Point};
use thiserror::Error;

use crate::{
    element::PathElement,
    error::VisitError,
    raw::ElementSource,
    visit::{for_each_element, visit_path, PathVisitor},
    visitors::EndPoints,
};

/// Dash pattern used to cut a path into unit length pieces before sampling.
const UNIT_DASHES: [f64; 2] = [1.0, 1.0];

/// Errors that can occur when building a track.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TrackError {
    /// The path produced no points to place on the track.
    #[error("Path has no on-curve points to sample")]
    Empty,
    /// The path could not be traversed.
    #[error(transparent)]
    Visit(#[from] VisitError),
}

/// Closed ring of sample points.
#[derive(Clone, PartialEq, Debug)]
pub struct Track {
    points: Vec<Point>,
}

impl Track {
    /// Samples `path` at roughly one point per unit of arc length.
    ///
    /// The path is dashed with one unit on and one unit off, then the end
    /// point of every dashed element is kept unless it lies closer than
    /// `min_distance` to the previously kept point. The number of samples
    /// grows with the length of the path, so coordinates should be finite
    /// and of screen scale.
    pub fn from_path<S>(path: &S, min_distance: f64) -> Result<Self, TrackError>
    where
        S: ElementSource + ?Sized,
    {
        let mut sampler = EndPoints::new(min_distance);
        let mut subpath: Vec<PathEl> = vec![];
        for_each_element(path, |el| match el {
            PathElement::MoveTo(p) => {
                sample_dashed(&subpath, &mut sampler);
                subpath.clear();
                subpath.push(PathEl::MoveTo(p));
            }
            PathElement::ClosePath => {
                // close with an explicit line so the subpath dashes as open
                let Some(&PathEl::MoveTo(start)) = subpath.first() else {
                    return;
                };
                if subpath.last().and_then(PathEl::end_point) != Some(start) {
                    subpath.push(PathEl::LineTo(start));
                }
                sample_dashed(&subpath, &mut sampler);
                subpath.clear();
                subpath.push(PathEl::MoveTo(start));
            }
            segment => subpath.push(segment.into()),
        })?;
        sample_dashed(&subpath, &mut sampler);
        let track = Self::from_points(sampler.into_points())?;
        log::debug!("sampled {} track points from dashed path", track.len());
        Ok(track)
    }

    /// Samples only the end point of every element of `path`, dropping points
    /// closer than `min_distance` to the previously kept point.
    pub fn from_end_points<S>(path: &S, min_distance: f64) -> Result<Self, TrackError>
    where
        S: ElementSource + ?Sized,
    {
        let mut sampler = EndPoints::new(min_distance);
        visit_path(path, &mut sampler)?;
        let track = Self::from_points(sampler.into_points())?;
        log::debug!("sampled {} track points", track.len());
        Ok(track)
    }

    /// Creates a track from already sampled points.
    pub fn from_points(points: Vec<Point>) -> Result<Self, TrackError> {
        if points.is_empty() {
            return Err(TrackError::Empty);
        }
        Ok(Self { points })
    }

    /// Number of samples; never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns the samples in track order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the sample at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Returns the index `offset` steps away from `index`, wrapping around
    /// the ends of the track in either direction.
    pub fn wrap_index(&self, index: usize, offset: isize) -> usize {
        let len = self.points.len() as isize;
        (index as isize % len + offset % len).rem_euclid(len) as usize
    }

    /// Searches for the sample closest to `target`, starting at `start`.
    ///
    /// This is a local search: the neighbours on either side of `start` are
    /// compared and, if one of them is closer than `start`, the search keeps
    /// walking in that direction for as long as the distance strictly
    /// decreases. The walk never goes further than once around the track,
    /// and a non-finite `target` returns `start` unchanged.
    pub fn nearest(&self, start: usize, target: Point) -> usize {
        let start = self.wrap_index(start, 0);
        if !target.is_finite() {
            return start;
        }
        let distance_at = |offset| self.points[self.wrap_index(start, offset)].distance(target);
        let before = distance_at(-1);
        let current = distance_at(0);
        let after = distance_at(1);
        if current <= before && current <= after {
            return start;
        }
        let (direction, mut distance) = if before < after {
            (-1, before)
        } else {
            (1, after)
        };
        let mut offset = direction;
        for _ in 1..self.len() {
            let next_offset = offset + direction;
            let next_distance = distance_at(next_offset);
            if next_distance >= distance {
                break;
            }
            distance = next_distance;
            offset = next_offset;
        }
        self.wrap_index(start, offset)
    }

    /// Maps a sample index onto `range`.
    ///
    /// The index is taken as a fraction of the track length and scaled into
    /// the range, rounding up. Index zero maps to the start of the range.
    pub fn value_at(&self, index: usize, range: RangeInclusive<i32>) -> i32 {
        let index = self.wrap_index(index, 0);
        let fraction = index as f64 / self.points.len() as f64;
        let (min, max) = (*range.start() as f64, *range.end() as f64);
        (fraction * (max - min) + min).ceil() as i32
    }
}

/// Feeds the end points of one dashed subpath to `sampler`, in path order.
fn sample_dashed(subpath: &[PathEl], sampler: &mut EndPoints) {
    let dashed = kurbo::dash(subpath.iter().copied(), 0.0, &UNIT_DASHES).collect::<Vec<_>>();
    // the first dash of an open subpath is emitted last
    let first = dashed
        .iter()
        .rposition(|el| matches!(el, PathEl::MoveTo(_)))
        .unwrap_or(0);
    for el in dashed[first..].iter().chain(&dashed[..first]) {
        sampler.visit(PathElement::from(*el));
    }
}
