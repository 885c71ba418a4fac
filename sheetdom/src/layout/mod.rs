mod measure;
mod rect;

pub use measure::measure_text_height;
pub use rect::Rect;

use std::collections::HashMap;

/// Resolved geometry for an element tree, filled in by the host's layout
/// pass and consumed by hit testing.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rects.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
