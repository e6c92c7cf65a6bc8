/// DOM hooks and frame-loop limits for the web frontend.
///
/// The page is expected to provide elements with these ids; missing
/// elements are skipped rather than treated as errors.
// Dashboard
pub const TOTAL_COST_ID: &str = "total-cost";
pub const LAST_INTERACTION_ID: &str = "last-interaction";
pub const SELECTION_LABEL_ID: &str = "selected-option";

// Picker cards are `option-<catalog id>`
pub const OPTION_CARD_PREFIX: &str = "option-";
pub const SELECTED_CARD_CLASS: &str = "selected";

// Frame loop
pub const MAX_FRAME_DT_MS: u64 = 100; // clamp after the tab was in the background

// Cost display keeps this many decimals, truncated rather than rounded
pub const COST_DECIMALS: i32 = 2;
