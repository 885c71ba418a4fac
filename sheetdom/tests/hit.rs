use sheetdom::{hit_test, hit_test_any, hit_test_draggable, Element, LayoutResult, Rect};

fn tree() -> Element {
    Element::box_()
        .id("root")
        .child(Element::box_().id("background"))
        .child(
            Element::box_()
                .id("overlay")
                .clickable(true)
                .child(Element::box_().id("handle").draggable(true)),
        )
}

fn layout() -> LayoutResult {
    let mut layout = LayoutResult::new();
    layout.insert("root", Rect::from_size(80, 40));
    layout.insert("background", Rect::from_size(80, 40));
    layout.insert("overlay", Rect::from_size(80, 40));
    layout.insert("handle", Rect::new(30, 20, 20, 4));
    layout
}

#[test]
fn test_hit_test_clickable() {
    let root = tree();
    let layout = layout();

    assert_eq!(hit_test(&layout, &root, 5, 5), Some("overlay".into()));
}

#[test]
fn test_hit_test_miss_outside_bounds() {
    let root = tree();
    let layout = layout();

    assert_eq!(hit_test(&layout, &root, 100, 100), None);
    assert_eq!(hit_test_any(&layout, &root, 100, 100), None);
}

#[test]
fn test_hit_test_draggable_finds_handle() {
    let root = tree();
    let layout = layout();

    assert_eq!(
        hit_test_draggable(&layout, &root, 35, 21),
        Some("handle".into())
    );
    // Outside the handle there is nothing draggable
    assert_eq!(hit_test_draggable(&layout, &root, 5, 5), None);
}

#[test]
fn test_hit_test_prefers_topmost_sibling() {
    // Children are checked in reverse order: the later sibling renders on
    // top and wins the hit.
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("below").clickable(true))
        .child(Element::box_().id("above").clickable(true));

    let mut layout = LayoutResult::new();
    layout.insert("root", Rect::from_size(10, 10));
    layout.insert("below", Rect::from_size(10, 10));
    layout.insert("above", Rect::from_size(10, 10));

    assert_eq!(hit_test(&layout, &root, 3, 3), Some("above".into()));
}

#[test]
fn test_hit_test_any_returns_deepest() {
    let root = tree();
    let layout = layout();

    assert_eq!(hit_test_any(&layout, &root, 35, 21), Some("handle".into()));
    assert_eq!(hit_test_any(&layout, &root, 5, 5), Some("overlay".into()));
}

#[test]
fn test_hit_test_skips_elements_without_layout() {
    let root = tree();
    let mut layout = LayoutResult::new();
    layout.insert("root", Rect::from_size(80, 40));
    // overlay/handle have no resolved rects

    assert_eq!(hit_test(&layout, &root, 5, 5), None);
}
