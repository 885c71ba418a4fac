//! Modal bottom-sheet overlay for a retained-mode element tree.
//!
//! A [`BottomSheet`] presents caller-supplied content as a panel anchored to
//! the bottom edge, behind a dimming overlay. Depending on its configured
//! [`InteractionKind`] the sheet can be resized by dragging its handle bar,
//! dismissed by dragging past a threshold, or dismissed by tapping the
//! overlay. Show/hide and resize movements are animated through the host's
//! animation diff step; active drags track the pointer 1:1.

pub mod config;
pub mod controller;
pub mod drag;
pub mod overlay;
pub mod sheet;
pub mod visibility;

pub use config::{
    HandlePosition, InteractionKind, Shadow, SheetConfig, SizeSink, HANDLE_BAR_HEIGHT,
};
pub use controller::BottomSheet;
pub use drag::{dismiss_threshold, DragOutcome, DragState};
pub use overlay::{build_overlay, OVERLAY_ID};
pub use sheet::{
    build_sheet, handle_shift, hidden_offset, SheetView, HANDLE_ID, SHEET_CONTENT_ID, SHEET_ID,
    SHEET_ROOT_ID,
};
pub use visibility::{derive_shown, ScreenPhase, Visibility};
