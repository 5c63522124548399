//! Frame-range parsing and chunking.
//!
//! - **range**: textual frame-range expressions parsed into a normalized
//!   set of disjoint runs
//! - **chunker**: partitioning the set into bounded chunks, one per task

mod chunker;
mod range;

pub use chunker::{chunk_frames, Chunk};
pub use range::{FrameRun, FrameSet};
