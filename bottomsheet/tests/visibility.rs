use bottomsheet::{derive_shown, ScreenPhase, Visibility};

// =============================================================================
// Derived shown gate: open AND live AND appeared
// =============================================================================

#[test]
fn test_shown_requires_all_three_inputs() {
    for open in [false, true] {
        for live in [false, true] {
            for appeared in [false, true] {
                let phase = if live {
                    ScreenPhase::Live
                } else {
                    ScreenPhase::Appearing
                };
                let expected = open && live && appeared;
                assert_eq!(
                    derive_shown(open, phase, appeared),
                    expected,
                    "open={open} live={live} appeared={appeared}"
                );
            }
        }
    }
}

#[test]
fn test_shown_false_while_disappearing() {
    assert!(!derive_shown(true, ScreenPhase::Disappearing, true));
}

// =============================================================================
// Visibility coordinator
// =============================================================================

#[test]
fn test_visibility_starts_hidden() {
    let mut visibility = Visibility::new();
    assert!(!visibility.shown());
    // Open intent alone does not show the sheet
    assert!(!visibility.update(true));
    assert!(!visibility.shown());
}

#[test]
fn test_visibility_shows_once_live_and_appeared() {
    let mut visibility = Visibility::new();
    visibility.set_phase(ScreenPhase::Live);
    assert!(!visibility.update(true), "not appeared yet");

    visibility.mark_appeared();
    assert!(visibility.update(true), "shown flipped on");
    assert!(visibility.shown());
}

#[test]
fn test_visibility_update_reports_change_exactly_once() {
    let mut visibility = Visibility::new();
    visibility.set_phase(ScreenPhase::Live);
    visibility.mark_appeared();

    assert!(visibility.update(true));
    assert!(!visibility.update(true), "no change on identical input");
    assert!(visibility.update(false));
    assert!(!visibility.update(false));
}

#[test]
fn test_visibility_appeared_latch_is_one_shot() {
    let mut visibility = Visibility::new();
    visibility.mark_appeared();
    visibility.mark_appeared();
    assert!(visibility.has_appeared());

    // Leaving the live phase hides the sheet but keeps the latch
    visibility.set_phase(ScreenPhase::Live);
    visibility.update(true);
    assert!(visibility.shown());
    visibility.set_phase(ScreenPhase::Disappearing);
    visibility.update(true);
    assert!(!visibility.shown());
    assert!(visibility.has_appeared());
}
