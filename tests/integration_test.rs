use awesomeness_scorer::{
    character::Character,
    config::cvars,
    models::AwesomenessLevel,
    scoring,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;

// Tests that read or write the process-wide threshold serialize on this
// lock so they cannot observe each other's values.
static CVAR_GUARD: Mutex<()> = Mutex::new(());

#[test]
fn test_classification_bands() {
    assert_eq!(
        scoring::level_with_threshold(-5, 100),
        AwesomenessLevel::NotAwesome
    );
    assert_eq!(
        scoring::level_with_threshold(0, 100),
        AwesomenessLevel::SemiAwesome
    );
    assert_eq!(
        scoring::level_with_threshold(99, 100),
        AwesomenessLevel::SemiAwesome
    );
    assert_eq!(
        scoring::level_with_threshold(100, 100),
        AwesomenessLevel::Awesome
    );
}

#[test]
fn test_display_names_for_bands() {
    assert_eq!(
        scoring::level_with_threshold(-5, 100).display_name(),
        "NotAwesome"
    );
    assert_eq!(
        scoring::level_with_threshold(0, 100).display_name(),
        "SemiAwesome"
    );
    assert_eq!(
        scoring::level_with_threshold(100, 100).display_name(),
        "Awesome"
    );
}

#[test]
fn test_display_name_round_trip_fails_by_design() {
    for level in AwesomenessLevel::ALL {
        assert_eq!(
            AwesomenessLevel::from_display_name(level.display_name()),
            None
        );
    }
}

#[test]
fn test_threshold_change_affects_next_classification() {
    let _guard = CVAR_GUARD.lock().unwrap();

    assert_eq!(cvars::min_awesomeness(), cvars::DEFAULT_MIN_AWESOMENESS);
    assert_eq!(scoring::level_from_value(50), AwesomenessLevel::SemiAwesome);

    cvars::set_by_name(cvars::MIN_AWESOMENESS_NAME, 10).unwrap();
    assert_eq!(scoring::level_from_value(50), AwesomenessLevel::Awesome);

    cvars::set_min_awesomeness(cvars::DEFAULT_MIN_AWESOMENESS);
}

#[test]
fn test_boundary_crossing_broadcasts_once() {
    let _guard = CVAR_GUARD.lock().unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut character = Character::new("Boundary");

    character.set_awesomeness(99, "warm-up");

    let seen_obs = Rc::clone(&seen);
    character
        .on_awesomeness_changed
        .attach(move |level| seen_obs.borrow_mut().push(level));

    // 99 -> 100 crosses the SemiAwesome/Awesome boundary.
    character.set_awesomeness(100, "crossed the line");
    assert_eq!(*seen.borrow(), vec![AwesomenessLevel::Awesome]);
}

#[test]
fn test_same_band_update_stays_silent() {
    let _guard = CVAR_GUARD.lock().unwrap();

    let fired = Rc::new(RefCell::new(0));
    let mut character = Character::new("Quiet");

    character.set_awesomeness(50, "warm-up");

    let fired_obs = Rc::clone(&fired);
    character
        .on_awesomeness_changed
        .attach(move |_| *fired_obs.borrow_mut() += 1);

    // 50 -> 99 stays inside SemiAwesome.
    character.set_awesomeness(99, "still semi");
    assert_eq!(*fired.borrow(), 0);
}

#[test]
fn test_observers_fire_in_attachment_order() {
    let _guard = CVAR_GUARD.lock().unwrap();

    let order = Rc::new(RefCell::new(Vec::new()));
    let mut character = Character::new("Ordered");

    for tag in ["a", "b", "c"] {
        let order = Rc::clone(&order);
        character
            .on_awesomeness_changed
            .attach(move |_| order.borrow_mut().push(tag));
    }

    character.set_awesomeness(500, "skyrocketed");
    assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
}

#[test]
fn test_detached_observer_receives_nothing() {
    let _guard = CVAR_GUARD.lock().unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut character = Character::new("Detached");

    let seen_a = Rc::clone(&seen);
    let handle = character
        .on_awesomeness_changed
        .attach(move |level| seen_a.borrow_mut().push(("a", level)));
    let seen_b = Rc::clone(&seen);
    character
        .on_awesomeness_changed
        .attach(move |level| seen_b.borrow_mut().push(("b", level)));

    character.on_awesomeness_changed.detach(handle);

    character.set_awesomeness(-1, "took a dive");
    assert_eq!(*seen.borrow(), vec![("b", AwesomenessLevel::NotAwesome)]);
}

#[test]
fn test_lifecycle_observer_is_torn_down() {
    let _guard = CVAR_GUARD.lock().unwrap();

    let mut character = Character::new("Lifecycle");
    character.activate();
    assert_eq!(character.on_awesomeness_changed.observer_count(), 1);

    // Triggers the built-in high-level log observer.
    character.set_awesomeness(150, "promoted");

    character.deactivate();
    assert_eq!(character.on_awesomeness_changed.observer_count(), 0);
}
