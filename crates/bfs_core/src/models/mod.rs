//! Data models for BlendFarm Submit.
//!
//! This module contains the core data structures used throughout the
//! compiler:
//! - Enums for output formats and output addressing modes
//! - The scene context snapshot supplied by the host
//! - Task and command descriptors handed to the scheduler

mod enums;
mod scene;
mod tasks;

// Re-export all public types
pub use enums::{AddressingMode, ImageFormat};
pub use scene::SceneContext;
pub use tasks::{CommandDescriptor, TaskDescriptor};
