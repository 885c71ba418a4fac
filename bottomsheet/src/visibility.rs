//! Derives the sheet's on-screen state from three inputs: the caller's
//! requested-open intent, the host screen's transition phase, and a
//! one-shot "has appeared" latch armed after the first layout pass.
//!
//! The gate keeps the entry animation from racing the host screen's own
//! transition: the sheet only animates in once the screen is live and has
//! laid out at least once.

/// Transition phase of the host screen presenting the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenPhase {
    /// Screen-enter transition still running.
    #[default]
    Appearing,
    /// Screen is live and in the foreground.
    Live,
    /// Screen-exit transition running.
    Disappearing,
}

/// Derive the sheet's visual shown state.
pub fn derive_shown(requested_open: bool, phase: ScreenPhase, appeared: bool) -> bool {
    requested_open && phase == ScreenPhase::Live && appeared
}

/// Tracks the derived shown state across updates.
#[derive(Debug, Default)]
pub struct Visibility {
    phase: ScreenPhase,
    appeared: bool,
    shown: bool,
}

impl Visibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ScreenPhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: ScreenPhase) {
        self.phase = phase;
    }

    /// Arm the appearance latch. Called from the host's post-layout
    /// callback, never from a timer: one confirmed layout pass must have
    /// completed before any entry animation is armed.
    pub fn mark_appeared(&mut self) {
        if !self.appeared {
            log::debug!("sheet appearance latch armed");
            self.appeared = true;
        }
    }

    pub fn has_appeared(&self) -> bool {
        self.appeared
    }

    pub fn shown(&self) -> bool {
        self.shown
    }

    /// Re-derive the shown state. Returns true when it changed, so the
    /// caller can apply the configured animation exactly on change.
    pub fn update(&mut self, requested_open: bool) -> bool {
        let next = derive_shown(requested_open, self.phase, self.appeared);
        let changed = next != self.shown;
        self.shown = next;
        changed
    }
}
