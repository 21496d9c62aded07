// Typed descent through untyped page JSON (ytInitialData, TikTok rehydration blobs).
//
// Each step either finds the next value or reports exactly which step was
// missing, so a layout change upstream shows up as
// "missing `metadataRows` at header.pageHeaderRenderer.content..." rather than
// a bare None.

use std::fmt;

use serde_json::Value;

/// One hop into a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Key(&'static str),
    Index(usize),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(key) => f.write_str(key),
            Step::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// Where a descent stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingStep {
    /// Steps that resolved before the failure, rendered dotted.
    pub at: String,
    pub missing: Step,
}

impl fmt::Display for MissingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.at.is_empty() {
            write!(f, "missing `{}` at document root", self.missing)
        } else {
            write!(f, "missing `{}` at {}", self.missing, self.at)
        }
    }
}

/// A fixed path into a JSON document.
#[derive(Debug, Clone, Copy)]
pub struct JsonPath(pub &'static [Step]);

impl JsonPath {
    /// Follow every step from `root`.
    pub fn resolve<'v>(&self, root: &'v Value) -> Result<&'v Value, MissingStep> {
        descend(root, self.0, "")
    }

    /// Follow every step starting from a value already reached by `prefix`.
    /// The prefix only feeds error messages.
    pub fn resolve_from<'v>(
        &self,
        value: &'v Value,
        prefix: &str,
    ) -> Result<&'v Value, MissingStep> {
        descend(value, self.0, prefix)
    }
}

fn descend<'v>(root: &'v Value, steps: &[Step], prefix: &str) -> Result<&'v Value, MissingStep> {
    let mut current = root;
    let mut at = prefix.to_string();

    for step in steps {
        let next = match step {
            Step::Key(key) => current.get(*key),
            Step::Index(i) => current.get(*i),
        };
        match next {
            Some(value) if !value.is_null() => current = value,
            _ => {
                return Err(MissingStep {
                    at,
                    missing: *step,
                })
            }
        }
        match step {
            Step::Key(key) if at.is_empty() => at.push_str(key),
            Step::Key(key) => {
                at.push('.');
                at.push_str(key);
            }
            Step::Index(i) => at.push_str(&format!("[{i}]")),
        }
    }

    Ok(current)
}
