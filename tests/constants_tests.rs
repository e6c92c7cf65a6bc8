// Host-side tests for web frontend constants

#![allow(dead_code)]

mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn dom_ids_are_distinct_and_non_empty() {
    let ids = [TOTAL_COST_ID, LAST_INTERACTION_ID, SELECTION_LABEL_ID];
    for id in ids {
        assert!(!id.is_empty());
        assert!(!id.starts_with(OPTION_CARD_PREFIX));
    }
    assert_ne!(TOTAL_COST_ID, LAST_INTERACTION_ID);
    assert_ne!(LAST_INTERACTION_ID, SELECTION_LABEL_ID);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_clamp_is_above_a_normal_frame() {
    assert!(MAX_FRAME_DT_MS > 16);
    assert!(MAX_FRAME_DT_MS <= 250);
}
