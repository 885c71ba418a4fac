use std::time::Duration;

/// Configuration for a single property transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Transitions configuration for an element. A builder, like Style.
///
/// Only the properties an anchored overlay animates are transitionable:
/// vertical offset, fixed height, background color, and backdrop strength.
#[derive(Debug, Clone, Default)]
pub struct Transitions {
    pub top: Option<TransitionConfig>,
    pub height: Option<TransitionConfig>,
    pub background: Option<TransitionConfig>,
    pub backdrop: Option<TransitionConfig>,
}

impl Transitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, duration: Duration, easing: Easing) -> Self {
        self.top = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn height(mut self, duration: Duration, easing: Easing) -> Self {
        self.height = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn background(mut self, duration: Duration, easing: Easing) -> Self {
        self.background = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn backdrop(mut self, duration: Duration, easing: Easing) -> Self {
        self.backdrop = Some(TransitionConfig::new(duration, easing));
        self
    }

    /// Set transition for vertical movement (top offset and height).
    pub fn movement(self, duration: Duration, easing: Easing) -> Self {
        self.top(duration, easing).height(duration, easing)
    }

    /// Set transition for all properties.
    pub fn all(self, duration: Duration, easing: Easing) -> Self {
        self.movement(duration, easing)
            .background(duration, easing)
            .backdrop(duration, easing)
    }

    /// Returns true if any transition is configured.
    pub fn has_any(&self) -> bool {
        self.top.is_some()
            || self.height.is_some()
            || self.background.is_some()
            || self.backdrop.is_some()
    }
}
