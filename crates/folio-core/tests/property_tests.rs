//! Property-based tests for section navigation
//!
//! Uses proptest to check the navigation invariants over arbitrary targets
//! and arbitrary sequences of input commands.

use proptest::prelude::*;
use folio_core::{
    InputEvent, InputRouter, NavCommand, NavigationConfig, NavigationController, Section,
    SiteConfig, TransitionMode, SECTION_COUNT,
};
use folio_core::sections::{title_for_index, DEFAULT_TITLE};

// ============================================================================
// Strategy Generators
// ============================================================================

fn mode_strategy() -> impl Strategy<Value = TransitionMode> {
    prop_oneof![
        Just(TransitionMode::DisplayToggle),
        Just(TransitionMode::ScrollTransform),
    ]
}

fn command_strategy() -> impl Strategy<Value = NavCommand> {
    prop_oneof![
        Just(NavCommand::Previous),
        Just(NavCommand::Next),
        Just(NavCommand::First),
        Just(NavCommand::Last),
        (0..12usize).prop_map(NavCommand::GoTo),
    ]
}

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        prop::sample::select(vec!["ArrowLeft", "ArrowRight", "ArrowUp", "ArrowDown", " ", "Home", "End", "q"])
            .prop_map(|k| InputEvent::Key(k.to_string())),
        (-200.0..200.0f64, -200.0..200.0f64)
            .prop_map(|(delta_x, delta_y)| InputEvent::Wheel { delta_x, delta_y }),
        (0.0..1000.0f64, 0.0..1000.0f64).prop_map(|(x, y)| InputEvent::TouchStart { x, y }),
        (0.0..1000.0f64, 0.0..1000.0f64).prop_map(|(x, y)| InputEvent::TouchEnd { x, y }),
        (0..8usize).prop_map(InputEvent::NavClick),
    ]
}

fn controller(mode: TransitionMode) -> NavigationController {
    NavigationController::new(&NavigationConfig {
        mode,
        ..Default::default()
    })
}

/// Check every derived UI fact against the current section
fn assert_view_consistent(nav: &NavigationController) -> Result<(), TestCaseError> {
    let view = nav.view();
    let i = nav.current_index();

    prop_assert!(i < SECTION_COUNT);
    prop_assert_eq!(view.panels.iter().filter(|p| p.active).count(), 1);
    prop_assert!(view.panels[i].active);
    prop_assert_eq!(view.nav_active.iter().filter(|a| **a).count(), 1);
    prop_assert!(view.nav_active[i]);
    prop_assert!((view.progress - (i + 1) as f64 / SECTION_COUNT as f64).abs() < 1e-12);
    prop_assert_eq!(view.section_label, format!("{:02}", i + 1));
    prop_assert_eq!(view.title, title_for_index(i));
    Ok(())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// goToSection(i) for an in-range i lands on i with a consistent view
    #[test]
    fn goto_in_range_lands_on_target(start in 0..SECTION_COUNT, target in 0..SECTION_COUNT) {
        let mut nav = controller(TransitionMode::DisplayToggle);
        nav.go_to_section(start);
        nav.go_to_section(target);
        prop_assert_eq!(nav.current_index(), target);
        assert_view_consistent(&nav)?;
    }

    /// Out-of-range targets never change state, in either mode
    #[test]
    fn goto_out_of_range_is_noop(
        mode in mode_strategy(),
        start in 0..SECTION_COUNT,
        target in SECTION_COUNT..usize::MAX,
    ) {
        let mut nav = controller(mode);
        nav.go_to_section(start);
        nav.release_transition();
        let before = nav.clone();
        prop_assert!(nav.go_to_section(target).is_none());
        prop_assert_eq!(nav, before);
    }

    /// Re-selecting the current section never changes what is shown
    #[test]
    fn self_transition_keeps_view(mode in mode_strategy(), start in 0..SECTION_COUNT) {
        let mut nav = controller(mode);
        nav.go_to_section(start);
        nav.release_transition();
        let before = nav.view();
        let result = nav.go_to_section(start);
        prop_assert_eq!(nav.view(), before);
        if mode == TransitionMode::ScrollTransform {
            prop_assert!(result.is_none());
            prop_assert!(!nav.is_transitioning());
        }
    }

    /// Any command sequence keeps the state machine in range and the view
    /// consistent; in scroll-transform mode the guard blocks until released
    #[test]
    fn commands_preserve_invariants(
        mode in mode_strategy(),
        commands in prop::collection::vec(command_strategy(), 0..64),
        release_every in 1..4usize,
    ) {
        let mut nav = controller(mode);
        for (n, command) in commands.into_iter().enumerate() {
            let was_guarded = nav.is_transitioning();
            let before = nav.current();
            let transition = command.apply(&mut nav);
            if was_guarded {
                prop_assert!(transition.is_none());
                prop_assert_eq!(nav.current(), before);
            }
            if let Some(t) = transition {
                prop_assert_eq!(t.to, nav.current());
                prop_assert_eq!(t.guard.is_some(), mode == TransitionMode::ScrollTransform);
            }
            if n % release_every == 0 {
                nav.release_transition();
            }
            assert_view_consistent(&nav)?;
        }
    }

    /// Arbitrary raw input on a narrow viewport never moves the controller
    /// except through nav clicks
    #[test]
    fn narrow_viewport_ignores_gestures(
        events in prop::collection::vec(event_strategy(), 0..64),
        width in 0.0..=968.0f64,
    ) {
        let config = SiteConfig::default();
        let mut router = InputRouter::new(&config);
        let mut nav = NavigationController::new(&config.navigation);
        for event in events {
            let click = matches!(event, InputEvent::NavClick(_));
            let before = nav.current();
            let dispatch = router.dispatch(event, width, &mut nav);
            if !click {
                prop_assert_eq!(nav.current(), before);
                prop_assert!(!dispatch.prevent_default);
            }
            assert_view_consistent(&nav)?;
        }
    }
}

#[test]
fn next_and_previous_stop_at_bounds() {
    for mode in [TransitionMode::DisplayToggle, TransitionMode::ScrollTransform] {
        let mut nav = controller(mode);
        assert!(nav.previous().is_none());
        assert_eq!(nav.current(), Section::Home);

        nav.last();
        nav.release_transition();
        assert!(nav.next().is_none());
        assert_eq!(nav.current(), Section::Contact);
    }
}

#[test]
fn title_table_falls_back() {
    assert_eq!(title_for_index(SECTION_COUNT), DEFAULT_TITLE);
}
