use sheetdom::{Backdrop, Element, Position, Size, Transitions};

use crate::config::SheetConfig;

pub const OVERLAY_ID: &str = "sheet-overlay";

/// Full-bounds dimming layer behind the sheet.
///
/// Opacity is 0 when hidden and the configured maximum when shown; the
/// change animates under the configured curve. The layer is clickable only
/// when the interaction kind permits dismiss, so taps on it either close
/// the sheet or fall through as no-ops.
pub fn build_overlay(config: &SheetConfig, shown: bool) -> Element {
    let opacity = if shown { config.overlay_opacity } else { 0.0 };

    Element::box_()
        .id(OVERLAY_ID)
        .position(Position::Absolute)
        .top(0)
        .left(0)
        .right(0)
        .bottom(0)
        .width(Size::Fill)
        .height(Size::Fill)
        .z_index(90)
        .backdrop(Backdrop::Tint {
            color: config.overlay_color.clone(),
            opacity,
        })
        .transitions(
            Transitions::new().backdrop(config.animation.duration, config.animation.easing),
        )
        .clickable(config.kind.permits_dismiss())
}
