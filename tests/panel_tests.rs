// Host-side tests for dashboard formatting and picker card ids

#![allow(dead_code)]

mod constants {
    include!("../src/constants.rs");
}
mod panel {
    include!("../src/panel.rs");
}

use panel::*;
use glam::Vec3;
use showroom_core::{
    showroom_scene, Hit, MaterialId, PointerEvent, Selection, Showroom, ShowroomConfig,
};

fn quick_click(showroom: &mut Showroom, name: &str) {
    let surface = showroom.scene().find(name).unwrap();
    showroom.handle(PointerEvent::Down { time_ms: 0.0 });
    showroom.handle(PointerEvent::Up {
        time_ms: 50.0,
        hit: Some(Hit {
            surface,
            point: Vec3::new(7.0, 2.0, -12.0),
        }),
    });
}

#[test]
fn total_is_truncated_to_cents() {
    assert_eq!(format_total_cost(84.0), "84");
    assert_eq!(format_total_cost(24.75), "24.75");
    assert_eq!(format_total_cost(12.3456), "12.34");
    assert_eq!(format_total_cost(75.9), "75.9");
    assert_eq!(format_total_cost(0.009), "0");
    assert_eq!(format_total_cost(0.0), "0");
}

#[test]
fn negative_totals_floor_away_from_zero() {
    assert_eq!(format_total_cost(-20.0), "-20");
    assert_eq!(format_total_cost(-0.125), "-0.13");
}

#[test]
fn rounding_residue_shows_as_zero() {
    assert_eq!(format_total_cost(-3.552713678800501e-15), "0");
    assert_eq!(format_total_cost(4.8e-12), "0");
    assert_eq!(format_total_cost(24.749999999999996), "24.75");
}

#[test]
fn painting_and_reverting_two_walls_shows_zero() {
    let mut showroom = Showroom::new(showroom_scene().unwrap(), ShowroomConfig::default());
    for name in ["entry_wall_1", "dining_wall_1", "entry_wall_1", "dining_wall_1"] {
        quick_click(&mut showroom, name);
    }
    assert!(showroom.state().selected_walls().is_empty());
    assert!(showroom.state().total_cost().abs() < 1e-9);
    assert_eq!(format_total_cost(showroom.state().total_cost()), "0");
}

#[test]
fn non_finite_total_shows_zero() {
    assert_eq!(format_total_cost(f64::NAN), "0");
    assert_eq!(format_total_cost(f64::INFINITY), "0");
}

#[test]
fn option_cards_round_trip_their_ids() {
    let card = option_card_id("wallpaper_3");
    assert_eq!(card, "option-wallpaper_3");
    assert_eq!(option_id_from_card(&card), Some("wallpaper_3"));
    assert_eq!(option_id_from_card("option-"), None);
    assert_eq!(option_id_from_card("total-cost"), None);
}

#[test]
fn selection_label_uses_collection_name() {
    assert_eq!(describe_selection(&Selection::default()), "Villa Dorata · 12/roll");
    let custom = Selection {
        option: MaterialId::from("custom_1"),
        price: 7.5,
    };
    assert_eq!(describe_selection(&custom), "custom_1 · 7.5/roll");
}
