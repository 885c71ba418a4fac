//! Drives a scripted open -> drag -> settle -> dismiss sequence against
//! the sheet controller and prints the panel position per frame.

use std::fs::File;

use bottomsheet::{BottomSheet, ScreenPhase, SheetConfig, HANDLE_ID, OVERLAY_ID, SHEET_ID};
use sheetdom::{find_element, Edges, Element, Event, LayoutResult, MouseButton, Rect};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    let log_file = File::create("gesture.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let viewport = Rect::from_size(80, 400);
    let mut sheet = BottomSheet::new(
        SheetConfig::new().size_changed(|height| println!("  committed height: {height}")),
    );
    sheet.set_phase(ScreenPhase::Live);
    sheet.on_layout();
    sheet.measure_content(120);

    let mut layout = LayoutResult::new();
    layout.insert(OVERLAY_ID, viewport);
    layout.insert(SHEET_ID, Rect::new(0, 280, 80, 120));
    layout.insert(HANDLE_ID, Rect::new(0, 280, 80, 20));

    let mut open = true;
    let script = [
        ("open", None),
        ("grab handle", Some(drag(290))),
        ("pull down", Some(drag(330))),
        ("release", Some(release(330))),
        ("settled", None),
        ("grab again", Some(drag(290))),
        ("pull past threshold", Some(drag(380))),
        ("release", Some(release(380))),
        ("dismissed", None),
    ];

    let mut frame = sheet.view(&mut open, content(), viewport);
    for (label, event) in script {
        if let Some(event) = event {
            sheet.handle_event(&event, &mut open, &layout, &frame);
        }
        frame = sheet.view(&mut open, content(), viewport);
        let panel = find_element(&frame, SHEET_ID).expect("panel always in tree");
        println!(
            "{label}: open={open} top={:?} dragging={}",
            panel.top,
            sheet.is_dragging()
        );
    }

    Ok(())
}

fn content() -> Element {
    Element::col()
        .padding(Edges::all(1))
        .gap(1)
        .child(Element::text("Sheet content"))
        .child(Element::text("Drag the handle to resize or dismiss"))
}

fn drag(y: u16) -> Event {
    Event::Drag {
        target: None,
        x: 40,
        y,
        button: MouseButton::Left,
    }
}

fn release(y: u16) -> Event {
    Event::Release {
        target: None,
        x: 40,
        y,
        button: MouseButton::Left,
    }
}
