//! Partitioning a frame set into schedulable chunks.

use serde::{Deserialize, Serialize};

use super::range::{FrameRun, FrameSet};
use crate::compiler::{CompileError, CompileResult};

/// A bounded sub-range of frames assigned to one task.
///
/// A chunk holds at most `chunk_size` frames drawn in ascending order from
/// the full set. It may span multiple disjoint runs, but a contiguous run
/// is only ever split at the size boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    runs: Vec<FrameRun>,
}

impl Chunk {
    /// Number of frames in the chunk.
    pub fn frame_count(&self) -> u64 {
        self.runs.iter().map(FrameRun::len).sum()
    }

    /// First frame of the chunk.
    pub fn first_frame(&self) -> i64 {
        self.runs[0].start
    }

    /// Display token, e.g. "1-2" or "3,5-7".
    pub fn token(&self) -> String {
        self.runs
            .iter()
            .map(FrameRun::token)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Token in Blender's `--render-frame` syntax, with `..` range
    /// separators, e.g. "47..52" or "3,5..7".
    pub fn renderer_token(&self) -> String {
        self.runs
            .iter()
            .map(|run| run.token().replace('-', ".."))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Partition a frame set into consecutive chunks of at most `chunk_size`
/// frames, preserving ascending order. The last chunk may be smaller.
pub fn chunk_frames(set: &FrameSet, chunk_size: i64) -> CompileResult<Vec<Chunk>> {
    if chunk_size <= 0 {
        return Err(CompileError::invalid_chunk_size(chunk_size));
    }
    let chunk_size = chunk_size as u64;

    let mut chunks = Vec::new();
    let mut current: Vec<FrameRun> = Vec::new();
    let mut remaining = chunk_size;

    for run in set.runs() {
        let mut start = run.start;
        let mut left = run.len();

        while left > 0 {
            let take = left.min(remaining);
            let end = start + take as i64 - 1;
            current.push(FrameRun::new(start, end));
            start = end + 1;
            left -= take;
            remaining -= take;

            if remaining == 0 {
                chunks.push(Chunk {
                    runs: std::mem::take(&mut current),
                });
                remaining = chunk_size;
            }
        }
    }

    if !current.is_empty() {
        chunks.push(Chunk { runs: current });
    }

    tracing::debug!(
        chunk_size,
        chunk_count = chunks.len(),
        frame_count = set.frame_count(),
        "chunked frame set"
    );

    Ok(chunks)
}
