//! The sheet controller: owns transient view state and turns caller intent
//! plus input events into the overlay + panel subtree.

use sheetdom::{hit_test, hit_test_draggable, Element, Event, LayoutResult, Rect, Size};

use crate::config::SheetConfig;
use crate::drag::{DragOutcome, DragState};
use crate::overlay::build_overlay;
use crate::sheet::{build_sheet, SheetView, HANDLE_ID, SHEET_ROOT_ID};
use crate::visibility::{ScreenPhase, Visibility};

/// Bottom-sheet presentation controller.
///
/// The caller owns the open intent (a `bool` or an `Option` holding the
/// presented value); the controller owns everything transient: measured
/// content height, the drag gesture, and the shown/appeared gate. All
/// state changes happen on the UI thread through [`BottomSheet::view`],
/// [`BottomSheet::handle_event`] and the host callbacks.
pub struct BottomSheet {
    config: SheetConfig,
    visibility: Visibility,
    drag: DragState,
    content_height: u16,
    bottom_inset: u16,
    /// A dismissal happened since the last view; reconciles the
    /// optional-value attach form, whose open intent is re-derived from
    /// the held value each frame.
    pending_dismiss: bool,
}

impl BottomSheet {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            config,
            visibility: Visibility::new(),
            drag: DragState::new(),
            content_height: 0,
            bottom_inset: 0,
            pending_dismiss: false,
        }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Host screen transition phase changed.
    pub fn set_phase(&mut self, phase: ScreenPhase) {
        self.visibility.set_phase(phase);
    }

    /// Post-layout callback: arms the appearance latch after the first
    /// completed layout pass.
    pub fn on_layout(&mut self) {
        self.visibility.mark_appeared();
    }

    /// Safe-area inset at the bottom of the viewport (e.g. an IME row).
    pub fn set_bottom_inset(&mut self, inset: u16) {
        self.bottom_inset = inset;
    }

    /// Content measurement callback: the content's natural height,
    /// clamped to the configured maximum.
    pub fn measure_content(&mut self, height: u16) {
        self.content_height = height.min(self.config.max_height);
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn is_shown(&self) -> bool {
        self.visibility.shown()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn drag_offset(&self) -> i16 {
        self.drag.offset()
    }

    /// Build this frame's subtree: dimming overlay + bottom panel.
    ///
    /// The panel stays in the tree while hidden, parked below the
    /// viewport, so hide transitions have a target to run against.
    /// Re-viewing with unchanged state yields an identical subtree
    /// (stable ids, same property values), so the animation diff step
    /// sees nothing to replay.
    pub fn view(&mut self, open: &mut bool, content: Element, viewport: Rect) -> Element {
        // The pending marker only matters to view_item, which consumes it
        // before delegating here. The boolean form had its flag written in
        // handle_event already, so a stale marker must not override a
        // caller who re-opened since.
        self.pending_dismiss = false;
        self.visibility.update(*open);

        let view = SheetView {
            shown: self.visibility.shown(),
            dragging: self.drag.is_active(),
            drag_offset: self.drag.offset(),
            content_height: self.content_height,
            bottom_inset: self.bottom_inset,
            viewport,
        };

        Element::box_()
            .id(SHEET_ROOT_ID)
            .width(Size::Fill)
            .height(Size::Fill)
            .child(build_overlay(&self.config, view.shown))
            .child(build_sheet(&self.config, content, &view))
    }

    /// Optional-value attach form: presence of a value implies open, and
    /// the held value is passed to the content producer. A value that
    /// vanished while open degenerates to an empty sheet. A dismissal
    /// clears the value.
    pub fn view_item<T>(
        &mut self,
        item: &mut Option<T>,
        render: impl FnOnce(&T) -> Element,
        viewport: Rect,
    ) -> Element {
        if std::mem::take(&mut self.pending_dismiss) {
            *item = None;
        }
        let content = match item.as_ref() {
            Some(value) => render(value),
            None => Element::box_(),
        };
        let mut open = item.is_some();
        self.view(&mut open, content, viewport)
    }

    /// Route one input event. `layout` and `root` are the host's resolved
    /// geometry and the subtree returned by the last [`BottomSheet::view`].
    pub fn handle_event(
        &mut self,
        event: &Event,
        open: &mut bool,
        layout: &LayoutResult,
        root: &Element,
    ) {
        match event {
            Event::Click { x, y, .. } => {
                if !self.config.kind.permits_dismiss() {
                    return;
                }
                if hit_test(layout, root, *x, *y).as_deref() == Some(crate::overlay::OVERLAY_ID) {
                    log::debug!("overlay tapped, closing sheet");
                    *open = false;
                    self.pending_dismiss = true;
                }
            }
            Event::Drag { x, y, .. } => {
                // Once a drag is active, keep sampling even when the
                // pointer leaves the handle.
                if self.drag.is_active()
                    || hit_test_draggable(layout, root, *x, *y).as_deref() == Some(HANDLE_ID)
                {
                    // Rows past i16::MAX saturate instead of wrapping negative
                    self.drag
                        .sample(self.config.kind, (*y).min(i16::MAX as u16) as i16);
                }
            }
            Event::Release { .. } => {
                match self.drag.release(self.config.kind, self.content_height) {
                    Some(DragOutcome::Dismiss) => {
                        log::debug!("drag past threshold, closing sheet");
                        *open = false;
                        self.pending_dismiss = true;
                    }
                    Some(DragOutcome::Settle { height }) => {
                        log::debug!("drag settled at height {height}");
                        (self.config.size_changed)(height);
                    }
                    None => {}
                }
            }
            _ => {}
        }
    }
}
