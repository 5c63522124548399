//! Frame-range expression parsing and normalization.

use serde::{Deserialize, Serialize};

use crate::compiler::{CompileError, CompileResult};

/// A contiguous inclusive run of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRun {
    pub start: i64,
    pub end: i64,
}

impl FrameRun {
    /// Create a run; `start` must not exceed `end`.
    pub fn new(start: i64, end: i64) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of frames in the run.
    pub fn len(&self) -> u64 {
        (self.end - self.start + 1) as u64
    }

    /// Display token for the run: "5" or "5-10".
    pub fn token(&self) -> String {
        if self.start == self.end {
            self.start.to_string()
        } else {
            format!("{}-{}", self.start, self.end)
        }
    }
}

/// An ordered, deduplicated set of frames as merged disjoint runs.
///
/// Duplicates and overlaps are permitted in the input expression and
/// normalized away here, so chunking always sees a sorted set with each
/// frame present exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSet {
    runs: Vec<FrameRun>,
}

impl FrameSet {
    /// Parse a frame-range expression.
    ///
    /// Accepts comma-separated single frames and inclusive `a-b` ranges
    /// with arbitrary whitespace ("3, 5-10, 47-327"). Unparsable tokens
    /// and reversed ranges fail with `MalformedFrameRange`.
    pub fn parse(expr: &str) -> CompileResult<Self> {
        if expr.trim().is_empty() {
            return Err(CompileError::malformed_frame_range("(empty)"));
        }

        let mut runs = Vec::new();
        for token in expr.split(',') {
            let token = token.trim();
            runs.push(parse_token(token)?);
        }

        Ok(Self::from_runs(runs))
    }

    /// Build a set from arbitrary runs, normalizing order and overlaps.
    pub fn from_runs(mut runs: Vec<FrameRun>) -> Self {
        runs.sort_by_key(|run| (run.start, run.end));

        let mut merged: Vec<FrameRun> = Vec::with_capacity(runs.len());
        for run in runs {
            match merged.last_mut() {
                // Merge overlapping and adjacent runs into one.
                Some(last) if run.start <= last.end + 1 => {
                    last.end = last.end.max(run.end);
                }
                _ => merged.push(run),
            }
        }

        Self { runs: merged }
    }

    /// The normalized runs in ascending order.
    pub fn runs(&self) -> &[FrameRun] {
        &self.runs
    }

    /// Total number of frames in the set.
    pub fn frame_count(&self) -> u64 {
        self.runs.iter().map(FrameRun::len).sum()
    }

    /// Iterate every frame in ascending order.
    pub fn frames(&self) -> impl Iterator<Item = i64> + '_ {
        self.runs.iter().flat_map(|run| run.start..=run.end)
    }
}

fn parse_token(token: &str) -> CompileResult<FrameRun> {
    if let Some((start, end)) = token.split_once('-') {
        let start: i64 = parse_frame(start.trim(), token)?;
        let end: i64 = parse_frame(end.trim(), token)?;
        if start > end {
            return Err(CompileError::malformed_frame_range(token));
        }
        Ok(FrameRun::new(start, end))
    } else {
        let frame = parse_frame(token, token)?;
        Ok(FrameRun::new(frame, frame))
    }
}

fn parse_frame(text: &str, token: &str) -> CompileResult<i64> {
    text.parse::<i64>()
        .map_err(|_| CompileError::malformed_frame_range(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_singles_and_ranges() {
        let set = FrameSet::parse("3, 5-10, 47-327").unwrap();
        assert_eq!(
            set.runs(),
            &[
                FrameRun::new(3, 3),
                FrameRun::new(5, 10),
                FrameRun::new(47, 327)
            ]
        );
        assert_eq!(set.frame_count(), 1 + 6 + 281);
    }

    #[test]
    fn tolerates_arbitrary_whitespace() {
        let set = FrameSet::parse("  1 ,  4 -  6 ,9").unwrap();
        assert_eq!(set.runs(), &[FrameRun::new(1, 1), FrameRun::new(4, 6), FrameRun::new(9, 9)]);
    }

    #[test]
    fn normalizes_overlaps_and_duplicates() {
        let set = FrameSet::parse("5-10, 1, 8-12, 1, 11").unwrap();
        assert_eq!(set.runs(), &[FrameRun::new(1, 1), FrameRun::new(5, 12)]);
        assert_eq!(set.frame_count(), 9);
    }

    #[test]
    fn merges_adjacent_runs() {
        let set = FrameSet::parse("1-3, 4-6").unwrap();
        assert_eq!(set.runs(), &[FrameRun::new(1, 6)]);
    }

    #[test]
    fn rejects_garbage_token() {
        let err = FrameSet::parse("1, x, 3").unwrap_err();
        assert!(matches!(
            err,
            CompileError::MalformedFrameRange { ref token } if token == "x"
        ));
    }

    #[test]
    fn rejects_reversed_range() {
        let err = FrameSet::parse("10-5").unwrap_err();
        assert!(matches!(
            err,
            CompileError::MalformedFrameRange { ref token } if token == "10-5"
        ));
    }

    #[test]
    fn rejects_empty_expression() {
        assert!(FrameSet::parse("   ").is_err());
        assert!(FrameSet::parse("1,,3").is_err());
    }

    #[test]
    fn frames_iterates_ascending() {
        let set = FrameSet::parse("5-6, 2").unwrap();
        let frames: Vec<i64> = set.frames().collect();
        assert_eq!(frames, vec![2, 5, 6]);
    }
}
