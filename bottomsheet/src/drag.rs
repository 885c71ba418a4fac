//! Drag state machine for the handle bar gesture.

use crate::config::{InteractionKind, HANDLE_BAR_HEIGHT};

/// Downward distance past which a release dismisses the sheet.
///
/// clamp(height - 50, 0, 100): capped at 100 units, scaled down for short
/// sheets so they are easier to dismiss.
pub fn dismiss_threshold(height: u16) -> u16 {
    height.saturating_sub(50).min(100)
}

/// What a finished drag gesture resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Offset exceeded the dismiss threshold; close the sheet.
    Dismiss,
    /// Gesture settled; the sheet committed to a new height.
    Settle { height: u16 },
}

/// Continuous gesture state. Inert between gestures.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    /// Translation value of the first sample. The offset is computed
    /// against this anchor, so tracking may begin anywhere in the gesture.
    anchor: Option<i16>,
    offset: i16,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Current offset from the anchor; positive is downward.
    pub fn offset(&self) -> i16 {
        self.offset
    }

    /// Feed one movement sample (absolute translation). No-op unless the
    /// interaction kind permits dragging.
    pub fn sample(&mut self, kind: InteractionKind, translation: i16) {
        if !kind.permits_drag() {
            return;
        }
        let anchor = *self.anchor.get_or_insert(translation);
        self.offset = translation - anchor;
    }

    /// End the gesture. Returns the outcome, or None if no drag was active.
    /// Offset and anchor are reset either way.
    pub fn release(&mut self, kind: InteractionKind, height: u16) -> Option<DragOutcome> {
        self.anchor.take()?;
        let offset = std::mem::take(&mut self.offset);

        if kind.permits_dismiss() && offset > dismiss_threshold(height) as i16 {
            return Some(DragOutcome::Dismiss);
        }

        let settled = (i32::from(height) - i32::from(HANDLE_BAR_HEIGHT) - i32::from(offset))
            .max(0) as u16;
        Some(DragOutcome::Settle { height: settled })
    }
}
