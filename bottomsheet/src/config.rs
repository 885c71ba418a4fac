use std::time::Duration;

use sheetdom::{Color, Easing, TransitionConfig};

/// Height of the handle bar row, in logical units.
pub const HANDLE_BAR_HEIGHT: u16 = 20;

/// How the user may interact with a presented sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionKind {
    /// No drag, no dismiss.
    Static,
    /// Tapping the overlay closes the sheet; no drag.
    TapDismiss,
    /// Dragging resizes the sheet; it cannot be dismissed.
    Resizable,
    /// Dragging resizes or, past the threshold, dismisses.
    #[default]
    InteractiveDismiss,
}

impl InteractionKind {
    /// Whether the handle bar accepts drag gestures.
    pub fn permits_drag(self) -> bool {
        matches!(self, Self::Resizable | Self::InteractiveDismiss)
    }

    /// Whether the sheet may be closed by the user (overlay tap or
    /// drag past the threshold - both gated by the same flag).
    pub fn permits_dismiss(self) -> bool {
        matches!(self, Self::TapDismiss | Self::InteractiveDismiss)
    }
}

/// Where the handle bar sits relative to the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlePosition {
    /// Handle overlaps the content's top edge.
    #[default]
    Inside,
    /// Handle occupies a dedicated strip above the content.
    Outside,
}

/// Drop shadow under the sheet panel. The margin widens the off-screen
/// parking offset so the shadow never clips at the viewport edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub margin: u16,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::oklcha(0.0, 0.0, 0.0, 0.35),
            margin: 8,
        }
    }
}

/// Write-only sink receiving the committed height after each drag-resize.
pub type SizeSink = Box<dyn Fn(u16)>;

/// Immutable configuration for one sheet presentation.
pub struct SheetConfig {
    pub max_height: u16,
    pub kind: InteractionKind,
    pub overlay_color: Color,
    pub overlay_opacity: f32,
    pub shadow: Option<Shadow>,
    pub background: Color,
    pub handle_color: Color,
    pub handle_position: HandlePosition,
    /// Rounding of the two top corners. None derives half the handle bar.
    pub top_radius: Option<u16>,
    pub size_changed: SizeSink,
    pub ignore_bottom_inset: bool,
    pub animation: TransitionConfig,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            max_height: 600,
            kind: InteractionKind::InteractiveDismiss,
            overlay_color: Color::oklch(0.0, 0.0, 0.0),
            overlay_opacity: 0.4,
            shadow: Some(Shadow::default()),
            background: Color::oklch(0.97, 0.005, 250.0),
            handle_color: Color::oklch(0.85, 0.01, 250.0),
            handle_position: HandlePosition::Inside,
            top_radius: None,
            size_changed: Box::new(|_| {}),
            ignore_bottom_inset: false,
            animation: TransitionConfig::new(Duration::from_millis(250), Easing::EaseOut),
        }
    }
}

impl SheetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_height(mut self, max_height: u16) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn kind(mut self, kind: InteractionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn overlay_color(mut self, color: Color) -> Self {
        self.overlay_color = color;
        self
    }

    pub fn overlay_opacity(mut self, opacity: f32) -> Self {
        self.overlay_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn shadow(mut self, shadow: Option<Shadow>) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn handle_color(mut self, color: Color) -> Self {
        self.handle_color = color;
        self
    }

    pub fn handle_position(mut self, position: HandlePosition) -> Self {
        self.handle_position = position;
        self
    }

    pub fn top_radius(mut self, radius: u16) -> Self {
        self.top_radius = Some(radius);
        self
    }

    pub fn size_changed(mut self, sink: impl Fn(u16) + 'static) -> Self {
        self.size_changed = Box::new(sink);
        self
    }

    pub fn ignore_bottom_inset(mut self, ignore: bool) -> Self {
        self.ignore_bottom_inset = ignore;
        self
    }

    pub fn animation(mut self, animation: TransitionConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Top corner rounding, derived from the handle bar unless overridden.
    pub fn resolved_top_radius(&self) -> u16 {
        self.top_radius.unwrap_or(HANDLE_BAR_HEIGHT / 2)
    }

    /// Extra parking distance so the shadow never clips.
    pub fn shadow_margin(&self) -> u16 {
        self.shadow.as_ref().map(|s| s.margin).unwrap_or(0)
    }
}
