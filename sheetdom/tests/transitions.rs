use std::collections::HashSet;
use std::time::Duration;

use sheetdom::animation::{collect_element_ids, AnimationState, PropertyValue, TransitionProperty};
use sheetdom::{Backdrop, Color, Easing, Element, Size, Style, Transitions};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in() {
    // EaseIn: t * t (quadratic)
    assert_eq!(Easing::EaseIn.apply(0.0), 0.0);
    assert_eq!(Easing::EaseIn.apply(1.0), 1.0);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
}

#[test]
fn test_easing_ease_out() {
    // EaseOut: 1 - (1-t)^2 (quadratic, fast start)
    assert_eq!(Easing::EaseOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseOut.apply(1.0), 1.0);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
}

#[test]
fn test_easing_ease_in_out() {
    assert_eq!(Easing::EaseInOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseInOut.apply(1.0), 1.0);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    // First half is slower (ease in), second half faster (ease out)
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

// =============================================================================
// Transitions Builder Tests
// =============================================================================

#[test]
fn test_transitions_default_empty() {
    let t = Transitions::new();
    assert!(!t.has_any());
    assert!(t.top.is_none());
    assert!(t.backdrop.is_none());
}

#[test]
fn test_transitions_individual_properties() {
    let t = Transitions::new()
        .top(Duration::from_millis(100), Easing::Linear)
        .backdrop(Duration::from_millis(200), Easing::EaseIn);

    assert!(t.has_any());
    assert!(t.top.is_some());
    assert!(t.backdrop.is_some());
    assert!(t.height.is_none());
    assert!(t.background.is_none());

    let top = t.top.unwrap();
    assert_eq!(top.duration, Duration::from_millis(100));
    assert_eq!(top.easing, Easing::Linear);
}

#[test]
fn test_transitions_movement_group() {
    let t = Transitions::new().movement(Duration::from_millis(300), Easing::EaseOut);

    assert!(t.top.is_some());
    assert!(t.height.is_some());
    assert!(t.background.is_none());
    assert!(t.backdrop.is_none());
}

#[test]
fn test_transitions_all_group() {
    let t = Transitions::new().all(Duration::from_millis(400), Easing::Linear);

    assert!(t.top.is_some());
    assert!(t.height.is_some());
    assert!(t.background.is_some());
    assert!(t.backdrop.is_some());
}

// =============================================================================
// AnimationState Tests
// =============================================================================

fn panel(top: i16) -> Element {
    Element::box_()
        .id("panel")
        .top(top)
        .height(Size::Fixed(100))
        .transitions(Transitions::new().top(Duration::from_millis(300), Easing::Linear))
}

#[test]
fn test_animation_state_new() {
    let state = AnimationState::new();
    assert!(!state.has_active_transitions());
}

#[test]
fn test_animation_state_no_transition_on_first_frame() {
    let mut state = AnimationState::new();

    state.update(&panel(50));
    // First frame just captures snapshot, no transition
    assert!(!state.has_active_transitions());
}

#[test]
fn test_animation_state_transition_on_top_change() {
    let mut state = AnimationState::new();

    state.update(&panel(50));
    state.update(&panel(150));

    assert!(state.has_active_transitions());
    let value = state.get_interpolated("panel", TransitionProperty::Top);
    assert!(matches!(value, Some(PropertyValue::I16(_))));
}

#[test]
fn test_animation_state_no_transition_without_change() {
    let mut state = AnimationState::new();

    state.update(&panel(50));
    state.update(&panel(50));

    assert!(!state.has_active_transitions());
}

#[test]
fn test_animation_state_no_transition_without_config() {
    let mut state = AnimationState::new();

    // Top changes but no transition configured for it
    let first = Element::box_().id("bare").top(0);
    let second = Element::box_().id("bare").top(80);
    state.update(&first);
    state.update(&second);

    assert!(!state.has_active_transitions());
}

#[test]
fn test_animation_state_backdrop_transition() {
    let mut state = AnimationState::new();

    let dimmed = |opacity: f32| {
        Element::box_()
            .id("overlay")
            .backdrop(Backdrop::Tint {
                color: Color::oklch(0.0, 0.0, 0.0),
                opacity,
            })
            .transitions(Transitions::new().backdrop(Duration::from_millis(300), Easing::Linear))
    };

    state.update(&dimmed(0.0));
    state.update(&dimmed(0.4));

    assert!(state.has_active_transitions());
    match state.get_interpolated("overlay", TransitionProperty::Backdrop) {
        Some(PropertyValue::F32(v)) => assert!((0.0..=0.4).contains(&v)),
        other => panic!("expected F32 interpolation, got {other:?}"),
    }
}

#[test]
fn test_animation_state_background_color_transition() {
    let mut state = AnimationState::new();

    let colored = |l: f32| {
        Element::box_()
            .id("panel")
            .style(Style::new().background(Color::oklch(l, 0.1, 200.0)))
            .transitions(Transitions::new().background(Duration::from_millis(300), Easing::Linear))
    };

    state.update(&colored(0.3));
    state.update(&colored(0.8));

    assert!(state.has_active_transitions());
    assert!(matches!(
        state.get_interpolated("panel", TransitionProperty::Background),
        Some(PropertyValue::Color(_))
    ));
}

#[test]
fn test_animation_state_reduced_motion() {
    let mut state = AnimationState::new();
    state.set_reduced_motion(true);

    state.update(&panel(50));
    state.update(&panel(150));

    assert!(!state.has_active_transitions());
}

#[test]
fn test_animation_state_cleanup_removes_old_elements() {
    let mut state = AnimationState::new();

    state.update(&panel(50));
    state.update(&panel(150));
    assert!(state.has_active_transitions());

    let empty_ids: HashSet<String> = HashSet::new();
    state.cleanup(&empty_ids);

    assert!(!state.has_active_transitions());
}

#[test]
fn test_animation_state_no_interpolated_without_transition() {
    let mut state = AnimationState::new();

    state.update(&panel(50));

    let value = state.get_interpolated("panel", TransitionProperty::Top);
    assert!(value.is_none());
}

// =============================================================================
// collect_element_ids Tests
// =============================================================================

#[test]
fn test_collect_element_ids_nested() {
    let element = Element::col()
        .id("parent")
        .child(Element::text("a").id("child1"))
        .child(Element::row().id("row").child(Element::text("b").id("deep")));

    let ids = collect_element_ids(&element);

    assert!(ids.contains("parent"));
    assert!(ids.contains("child1"));
    assert!(ids.contains("row"));
    assert!(ids.contains("deep"));
    assert_eq!(ids.len(), 4);
}

#[test]
fn test_element_transitions_default() {
    let element = Element::text("test");
    assert!(!element.transitions.has_any());
}
