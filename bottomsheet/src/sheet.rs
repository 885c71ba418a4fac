use sheetdom::{
    Align, Border, Element, Justify, Overflow, Position, Rect, Size, Style, Transitions,
};

use crate::config::{HandlePosition, InteractionKind, SheetConfig, HANDLE_BAR_HEIGHT};

pub const SHEET_ROOT_ID: &str = "sheet-root";
pub const SHEET_ID: &str = "sheet-panel";
pub const SHEET_CONTENT_ID: &str = "sheet-content";
pub const HANDLE_ID: &str = "sheet-handle";

/// Width of the pill inside the handle bar, in logical units.
const HANDLE_PILL_WIDTH: u16 = 36;
const HANDLE_PILL_HEIGHT: u16 = 4;

/// Vertical room reserved above the content for the handle bar.
///
/// Inside placement with drag enabled overlaps the content's top edge;
/// outside placement, or any non-draggable kind, gets a dedicated strip.
pub fn handle_shift(kind: InteractionKind, position: HandlePosition) -> u16 {
    if position == HandlePosition::Inside && kind.permits_drag() {
        0
    } else {
        HANDLE_BAR_HEIGHT
    }
}

/// Downward offset that parks the sheet fully below the viewport,
/// with room for the safe-area inset and the shadow.
pub fn hidden_offset(panel_height: u16, bottom_inset: u16, shadow_margin: u16) -> u16 {
    panel_height
        .saturating_add(bottom_inset)
        .saturating_add(shadow_margin)
}

/// Per-frame view state the controller feeds the sheet builder.
#[derive(Debug, Clone, Copy)]
pub struct SheetView {
    pub shown: bool,
    pub dragging: bool,
    pub drag_offset: i16,
    pub content_height: u16,
    pub bottom_inset: u16,
    pub viewport: Rect,
}

/// Build the sheet panel subtree: handle bar + content, bottom-anchored,
/// offset by drag / parking state.
pub fn build_sheet(config: &SheetConfig, content: Element, view: &SheetView) -> Element {
    let shift = handle_shift(config.kind, config.handle_position);
    let panel_height = view.content_height.saturating_add(shift);

    let inset = if config.ignore_bottom_inset {
        0
    } else {
        view.bottom_inset
    };

    let rest_top = i32::from(view.viewport.height.saturating_sub(panel_height));
    let offset: i32 = if view.shown {
        i32::from(view.drag_offset)
    } else {
        i32::from(hidden_offset(panel_height, inset, config.shadow_margin()))
    };
    let top = (rest_top + offset).clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;

    let content = Element::box_()
        .id(SHEET_CONTENT_ID)
        .width(Size::Fill)
        .height(Size::Fixed(view.content_height))
        .overflow(Overflow::Hidden)
        .child(content);

    let mut panel = Element::col()
        .id(SHEET_ID)
        .position(Position::Absolute)
        .left(0)
        .right(0)
        .top(top)
        .width(Size::Fill)
        .height(Size::Fixed(panel_height))
        .max_height(config.max_height.saturating_add(HANDLE_BAR_HEIGHT))
        .z_index(100)
        .style(
            Style::new()
                .background(config.background.clone())
                .border(Border::RoundedTop),
        )
        // Click barrier: taps on the panel must not fall through to the
        // overlay behind it.
        .clickable(true);

    // Offset animates on show/hide and settle, never while the finger is
    // down - drag frames carry no transitions so the diff step stays quiet.
    if !view.dragging {
        panel = panel.transitions(
            Transitions::new().movement(config.animation.duration, config.animation.easing),
        );
    }

    if shift == 0 {
        // Handle overlaps the content's top edge.
        let handle = build_handle(config)
            .position(Position::Absolute)
            .top(0)
            .left(0)
            .right(0)
            .z_index(1);
        panel.child(content).child(handle)
    } else {
        panel.child(build_handle(config)).child(content)
    }
}

fn build_handle(config: &SheetConfig) -> Element {
    Element::row()
        .id(HANDLE_ID)
        .width(Size::Fill)
        .height(Size::Fixed(HANDLE_BAR_HEIGHT))
        .justify(Justify::Center)
        .align(Align::Center)
        .draggable(config.kind.permits_drag())
        .child(
            Element::box_()
                .id("sheet-handle-pill")
                .width(Size::Fixed(HANDLE_PILL_WIDTH))
                .height(Size::Fixed(HANDLE_PILL_HEIGHT))
                .style(Style::new().background(config.handle_color.clone())),
        )
}
