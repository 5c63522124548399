//! Output path templating and resolution.
//!
//! - **template**: `{name}` placeholder substitution with verbatim
//!   pass-through of unrecognized tokens
//! - **resolver**: addressing modes, inherited path components, and the
//!   stable-directory/timestamp rule

mod resolver;
mod template;

pub use resolver::{build_template, resolve_output, ResolvedOutput};
pub use template::{PathTemplate, Placeholder};
