//! Path templates with named placeholders.
//!
//! A template is a plain string containing zero or more `{name}` tokens.
//! Only recognized placeholders are substituted; anything else, including
//! unknown `{...}` tokens and unclosed braces, passes through verbatim so
//! templates written against a newer convention are never silently mangled.

use serde::{Deserialize, Serialize};

/// The closed set of placeholders this engine resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Job-creation timestamp, shared by every task of one job.
    Timestamp,
}

impl Placeholder {
    /// Look up a placeholder by its token name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "timestamp" => Some(Self::Timestamp),
            _ => None,
        }
    }

    /// Get the token name of this placeholder.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
        }
    }
}

/// A path string with zero or more `{name}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathTemplate(String);

impl PathTemplate {
    /// Create a template from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the raw template string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the template contains the given placeholder.
    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.0.contains(&format!("{{{}}}", placeholder.name()))
    }

    /// Resolve the template with a concrete timestamp value.
    ///
    /// Recognized placeholders are substituted; unrecognized `{...}` tokens
    /// and stray braces are left verbatim.
    pub fn resolve(&self, timestamp: &str) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];
            match after_open.find('}') {
                Some(close) => {
                    let name = &after_open[..close];
                    match Placeholder::from_name(name) {
                        Some(Placeholder::Timestamp) => out.push_str(timestamp),
                        None => {
                            // Unknown token: keep it, braces and all.
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &after_open[close + 1..];
                }
                None => {
                    // Unclosed brace: keep the remainder verbatim.
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_timestamp() {
        let template = PathTemplate::new("/farm/job/{timestamp}/beauty_######");
        assert_eq!(
            template.resolve("2026-08-26_10-30-00"),
            "/farm/job/2026-08-26_10-30-00/beauty_######"
        );
    }

    #[test]
    fn leaves_unknown_placeholders_verbatim() {
        let template = PathTemplate::new("/farm/{layer}/{timestamp}/out");
        assert_eq!(template.resolve("T"), "/farm/{layer}/T/out");
    }

    #[test]
    fn leaves_unclosed_brace_verbatim() {
        let template = PathTemplate::new("/farm/{timestamp/out");
        assert_eq!(template.resolve("T"), "/farm/{timestamp/out");
    }

    #[test]
    fn plain_path_is_unchanged() {
        let template = PathTemplate::new("/proj/shot010/render/Anim03_######");
        assert_eq!(template.resolve("T"), "/proj/shot010/render/Anim03_######");
        assert!(!template.contains(Placeholder::Timestamp));
    }

    #[test]
    fn placeholder_lookup() {
        assert_eq!(Placeholder::from_name("timestamp"), Some(Placeholder::Timestamp));
        assert_eq!(Placeholder::from_name("layer"), None);
    }
}
