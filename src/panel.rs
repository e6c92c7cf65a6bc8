use crate::constants::{COST_DECIMALS, OPTION_CARD_PREFIX};
use showroom_core::{find_entry, Selection};

// Grid the raw total is rounded to before truncating to cents
const TOTAL_SNAP: f64 = 1e9;

/// Running total as shown on the dashboard: truncated to two decimals with
/// trailing zeros dropped (84 -> "84", 12.3456 -> "12.34").
///
/// Accumulated rounding error is snapped away first, so a total that should
/// be zero after painting and reverting never shows as "-0.01".
pub fn format_total_cost(total: f64) -> String {
    if !total.is_finite() {
        return "0".to_string();
    }
    let scale = 10f64.powi(COST_DECIMALS);
    let snapped = (total * TOTAL_SNAP).round() / TOTAL_SNAP;
    let truncated = (snapped * scale).floor() / scale;
    if truncated == 0.0 {
        return "0".to_string();
    }
    let text = format!("{:.*}", COST_DECIMALS as usize, truncated);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[inline]
pub fn option_card_id(option_id: &str) -> String {
    format!("{OPTION_CARD_PREFIX}{option_id}")
}

#[inline]
pub fn option_id_from_card(card_id: &str) -> Option<&str> {
    card_id
        .strip_prefix(OPTION_CARD_PREFIX)
        .filter(|id| !id.is_empty())
}

/// "Villa Dorata · 12/roll" for catalog entries, the raw id otherwise.
pub fn describe_selection(selection: &Selection) -> String {
    let price = format_total_cost(selection.price);
    match find_entry(selection.option.as_str()) {
        Some(entry) => format!("{} · {}/roll", entry.collection, price),
        None => format!("{} · {}/roll", selection.option, price),
    }
}
