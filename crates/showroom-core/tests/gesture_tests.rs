// Host-side tests for the click/drag gesture classifier.

use glam::Vec3;
use showroom_core::*;

fn hit() -> Hit {
    Hit {
        surface: SurfaceId(3),
        point: Vec3::new(1.0, 0.0, -2.0),
    }
}

fn press_and_release(classifier: &mut GestureClassifier, held_ms: f64) -> Gestures {
    classifier.feed(PointerEvent::Down { time_ms: 1000.0 });
    classifier.feed(PointerEvent::Up {
        time_ms: 1000.0 + held_ms,
        hit: Some(hit()),
    })
}

#[test]
fn release_just_under_threshold_is_a_click() {
    let mut classifier = GestureClassifier::default();
    let out = press_and_release(&mut classifier, 169.0);
    assert_eq!(out.as_slice(), &[Gesture::Click(hit())]);
    assert_eq!(classifier.last_hold_ms(), Some(169.0));
}

#[test]
fn release_at_threshold_is_not_a_click() {
    let mut classifier = GestureClassifier::default();
    let out = press_and_release(&mut classifier, 170.0);
    assert!(out.is_empty(), "unexpected gestures: {out:?}");
}

#[test]
fn long_press_is_not_a_click() {
    let mut classifier = GestureClassifier::default();
    let out = press_and_release(&mut classifier, 2500.0);
    assert!(!out.iter().any(|g| matches!(g, Gesture::Click(_))));
}

#[test]
fn custom_threshold_is_respected() {
    let mut classifier = GestureClassifier::new(50.0);
    assert!(press_and_release(&mut classifier, 60.0).is_empty());
    assert_eq!(press_and_release(&mut classifier, 40.0).len(), 1);
}

#[test]
fn release_without_press_does_not_click() {
    let mut classifier = GestureClassifier::default();
    let out = classifier.feed(PointerEvent::Up {
        time_ms: 20.0,
        hit: Some(hit()),
    });
    assert!(out.is_empty());
    assert_eq!(classifier.last_hold_ms(), None);
}

#[test]
fn second_release_without_new_press_does_not_reuse_old_timing() {
    let mut classifier = GestureClassifier::default();
    assert_eq!(press_and_release(&mut classifier, 30.0).len(), 1);
    let out = classifier.feed(PointerEvent::Up {
        time_ms: 1100.0,
        hit: Some(hit()),
    });
    assert!(out.is_empty());
}

#[test]
fn quick_release_over_nothing_is_missed() {
    let mut classifier = GestureClassifier::default();
    classifier.feed(PointerEvent::Down { time_ms: 0.0 });
    let out = classifier.feed(PointerEvent::Up {
        time_ms: 10.0,
        hit: None,
    });
    assert_eq!(out.as_slice(), &[Gesture::Missed]);
}

#[test]
fn moving_while_pressed_starts_a_single_drag() {
    let mut classifier = GestureClassifier::default();
    classifier.feed(PointerEvent::Down { time_ms: 0.0 });
    let first = classifier.feed(PointerEvent::Move { hit: Some(hit()) });
    let second = classifier.feed(PointerEvent::Move { hit: None });
    assert_eq!(first.as_slice(), &[Gesture::DragStart]);
    assert!(second.is_empty());
    assert!(classifier.is_dragging());

    let out = classifier.feed(PointerEvent::Up {
        time_ms: 400.0,
        hit: Some(hit()),
    });
    assert_eq!(out.as_slice(), &[Gesture::DragEnd]);
    assert!(!classifier.is_dragging());
}

#[test]
fn quick_drag_still_clicks_after_ending() {
    let mut classifier = GestureClassifier::default();
    classifier.feed(PointerEvent::Down { time_ms: 0.0 });
    classifier.feed(PointerEvent::Move { hit: None });
    let out = classifier.feed(PointerEvent::Up {
        time_ms: 90.0,
        hit: Some(hit()),
    });
    assert_eq!(out.as_slice(), &[Gesture::DragEnd, Gesture::Click(hit())]);
}

#[test]
fn hover_events_pass_through_when_not_pressed() {
    let mut classifier = GestureClassifier::default();
    assert_eq!(
        classifier
            .feed(PointerEvent::Over {
                surface: SurfaceId(1)
            })
            .as_slice(),
        &[Gesture::HoverEnter(SurfaceId(1))]
    );
    assert_eq!(
        classifier.feed(PointerEvent::Move { hit: Some(hit()) }).as_slice(),
        &[Gesture::HoverMove(hit())]
    );
    assert_eq!(
        classifier.feed(PointerEvent::Out { remaining: 0 }).as_slice(),
        &[Gesture::HoverExit { remaining: 0 }]
    );
    assert!(classifier.feed(PointerEvent::Move { hit: None }).is_empty());
}
