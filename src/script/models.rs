use std::fmt;

/// A user request against the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    /// Zero-based position.
    Remove(usize),
    Clear,
    Undo,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Add(item) => write!(f, "add {}", item),
            Intent::Remove(index) => write!(f, "remove {}", index + 1),
            Intent::Clear => write!(f, "clear"),
            Intent::Undo => write!(f, "undo"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub intent: Intent,
    pub line_number: usize, // one-based
}

impl ScriptLine {
    pub fn new(intent: Intent, line_number: usize) -> Self {
        Self { intent, line_number }
    }
}
