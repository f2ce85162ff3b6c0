use serde::{Deserialize, Serialize};

/// The outcome of the transform phase: every input line trimmed and the
/// whole list sorted ascending by code-point order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortResult {
    pub words: Vec<String>,
}

impl SortResult {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
