//! Split-boundary validation and segmentation for the Chow break test.
//!
//! Purpose
//! -------
//! Resolve a caller-supplied split boundary (last pre-break key, first
//! post-break key) against a validated [`ChowData`] series and produce the
//! positional extents of the pooled, pre-break, and post-break segments.
//!
//! Key behaviors
//! -------------
//! - [`SplitBoundary`] carries the two boundary keys as plain data; all
//!   validation happens against a concrete series in [`split`].
//! - [`split`] checks that both keys exist in the index, that the pre-break
//!   key strictly precedes the post-break key, and that each sub-segment
//!   holds strictly more observations than the number of coefficients the
//!   fitter will estimate.
//! - The returned [`SplitPositions`] is purely positional, so callers can
//!   slice whatever aligned arrays they hold (including column-selected
//!   design matrices) without re-touching the key index.
//!
//! Invariants & assumptions
//! ------------------------
//! - The series index is strictly increasing (guaranteed by `ChowData`), so
//!   every observation at position `<= pre_end` carries a key `<= last_pre`
//!   and every observation at position `>= post_start` carries a key
//!   `>= first_post`. No observation between the two boundary keys can be
//!   left unassigned: positions `pre_end + 1 .. post_start` would carry keys
//!   strictly between the boundary keys, and when both keys resolve and are
//!   adjacent in the index that range is empty.
//! - `n_coeffs` is the full coefficient count p + 1 (intercept included).
//!
//! Conventions
//! -----------
//! - Pre-break = keys `<= last_pre`; post-break = keys `>= first_post`;
//!   pooled = all observations, matching the upstream `.loc` slicing.
//! - Errors are reported via [`SeriesError`]; this module never panics on
//!   user-facing invalid boundaries.
//!
//! Downstream usage
//! ----------------
//! - The Chow engine calls [`split`] once per test invocation and slices
//!   its design matrix and response vector by the returned positions.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, missing keys, reversed and identical
//!   boundaries, and undersized segments on both sides.
use crate::series::data::ChowData;
use crate::series::errors::{SeriesError, SeriesResult};

/// Segment identity used in diagnostics and error payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// All observations, fitted under the pooled (no-break) model.
    Pooled,
    /// Observations with keys at or before the pre-break boundary.
    Pre,
    /// Observations with keys at or after the post-break boundary.
    Post,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Pooled => write!(f, "pooled"),
            Segment::Pre => write!(f, "pre-break"),
            Segment::Post => write!(f, "post-break"),
        }
    }
}

/// `SplitBoundary` — the two keys delimiting the hypothesized break.
///
/// Purpose
/// -------
/// Name the last observation of the pre-break regime and the first
/// observation of the post-break regime by their index keys. The pair is
/// plain data; [`split`] validates it against a concrete series.
///
/// Fields
/// ------
/// - `last_pre`: `i64`
///   Key of the final pre-break observation.
/// - `first_post`: `i64`
///   Key of the first post-break observation.
///
/// Invariants
/// ----------
/// - None at construction time; `last_pre < first_post` and membership in
///   the series index are enforced by [`split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitBoundary {
    /// Key of the final pre-break observation.
    pub last_pre: i64,
    /// Key of the first post-break observation.
    pub first_post: i64,
}

impl SplitBoundary {
    /// Bundle the two boundary keys.
    pub fn new(last_pre: i64, first_post: i64) -> Self {
        SplitBoundary { last_pre, first_post }
    }
}

/// `SplitPositions` — positional extents of the three segments.
///
/// Purpose
/// -------
/// Describe the pooled, pre-break, and post-break segments as half-open
/// positional ranges over the series arrays, so the engine can slice any
/// aligned array without consulting the key index again.
///
/// Fields
/// ------
/// - `n_pre`: `usize`
///   Pre-break observation count; the pre segment is positions `0..n_pre`.
/// - `post_start`: `usize`
///   First post-break position; the post segment is `post_start..n_total`.
/// - `n_post`: `usize`
///   Post-break observation count, `n_total - post_start`.
/// - `n_total`: `usize`
///   Total observation count (the pooled segment).
///
/// Invariants
/// ----------
/// - `0 < n_pre <= post_start < n_total` and `n_post = n_total - post_start`.
/// - Produced only by [`split`], which additionally guarantees each
///   sub-segment exceeds the requested coefficient count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPositions {
    /// Pre-break observation count (positions `0..n_pre`).
    pub n_pre: usize,
    /// First post-break position.
    pub post_start: usize,
    /// Post-break observation count.
    pub n_post: usize,
    /// Total observation count.
    pub n_total: usize,
}

/// Resolve and validate a split boundary against a series.
///
/// Parameters
/// ----------
/// - `data`: `&ChowData`
///   The validated observation series.
/// - `boundary`: `&SplitBoundary`
///   Keys of the last pre-break and first post-break observations.
/// - `n_coeffs`: `usize`
///   Number of coefficients the fitter will estimate per segment (p + 1
///   including the intercept). Each sub-segment must hold strictly more
///   observations than this.
///
/// Returns
/// -------
/// `SeriesResult<SplitPositions>`
///   Positional extents of the three segments on success.
///
/// Errors
/// ------
/// - `SeriesError::KeyNotFound` when either boundary key is absent from the
///   series index.
/// - `SeriesError::InvalidSplit` when `last_pre` does not strictly precede
///   `first_post` in series order (reversed or identical boundaries).
/// - `SeriesError::UndersizedSegment` when the pre- or post-break segment
///   holds `<= n_coeffs` observations, naming the offending segment.
///
/// Panics
/// ------
/// - Never panics; all invalid boundaries are reported via `SeriesError`.
///
/// Notes
/// -----
/// - The pooled segment needs no explicit size check here: it contains both
///   sub-segments, each of which already exceeds `n_coeffs`.
pub fn split(
    data: &ChowData, boundary: &SplitBoundary, n_coeffs: usize,
) -> SeriesResult<SplitPositions> {
    let pre_end = data
        .position_of(boundary.last_pre)
        .ok_or(SeriesError::KeyNotFound { key: boundary.last_pre })?;
    let post_start = data
        .position_of(boundary.first_post)
        .ok_or(SeriesError::KeyNotFound { key: boundary.first_post })?;

    if pre_end >= post_start {
        return Err(SeriesError::InvalidSplit {
            last_pre: boundary.last_pre,
            first_post: boundary.first_post,
        });
    }

    let n_total = data.len();
    let n_pre = pre_end + 1;
    let n_post = n_total - post_start;
    let min_len = n_coeffs + 1;

    if n_pre < min_len {
        return Err(SeriesError::UndersizedSegment { segment: Segment::Pre, len: n_pre, min_len });
    }
    if n_post < min_len {
        return Err(SeriesError::UndersizedSegment {
            segment: Segment::Post,
            len: n_post,
            min_len,
        });
    }

    Ok(SplitPositions { n_pre, post_start, n_post, n_total })
}
