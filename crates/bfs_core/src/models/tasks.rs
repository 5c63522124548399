//! Task and command descriptors handed to the external scheduler.

use serde::{Deserialize, Serialize};

/// One executable command with its ordered argument tokens.
///
/// The executable identity is a symbolic name ("blender"); the scheduler
/// resolves it to a concrete binary path and prepends any executable-level
/// launch arguments on the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Symbolic executable identity, resolved by the runtime.
    pub executable: String,
    /// Ordered argument tokens (positional and flag mixed).
    pub args: Vec<String>,
}

impl CommandDescriptor {
    /// Create a new command descriptor.
    pub fn new(executable: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            executable: executable.into(),
            args,
        }
    }
}

/// One schedulable unit of render work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    /// Task name, unique within the job (derived from the chunk's range token).
    pub name: String,
    /// Target executor identity.
    pub executor: String,
    /// Number of frames this task renders, used as scheduling weight.
    pub frame_count: u64,
    /// The command the worker runs.
    pub command: CommandDescriptor,
}

impl TaskDescriptor {
    /// Create a new task descriptor targeting the blender executor.
    pub fn blender(name: impl Into<String>, frame_count: u64, command: CommandDescriptor) -> Self {
        Self {
            name: name.into(),
            executor: "blender".to_string(),
            frame_count,
            command,
        }
    }
}
