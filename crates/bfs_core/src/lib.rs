//! BFS Core - job compilation for BlendFarm Submit
//!
//! This crate contains all business logic with zero UI dependencies:
//! given a scene context and job settings it deterministically resolves
//! the output path, chunks the frame range, and authors one schedulable
//! task per chunk. Nothing here renders, spawns workers, or persists
//! state; the task list is handed to an external scheduler.

pub mod author;
pub mod compiler;
pub mod config;
pub mod frames;
pub mod logging;
pub mod models;
pub mod paths;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
