use crate::constants::*;
use crate::dom;
use crate::panel;
use showroom_core::{Selection, CATALOG};
use web_sys as web;

#[inline]
pub fn update_total(document: &web::Document, total: f64) {
    dom::set_text(document, TOTAL_COST_ID, &panel::format_total_cost(total));
}

#[inline]
pub fn update_last_interaction(document: &web::Document, label: Option<&str>) {
    dom::set_text(document, LAST_INTERACTION_ID, label.unwrap_or(""));
}

/// Highlight the chosen card and clear the rest.
pub fn update_selection(document: &web::Document, selection: &Selection) {
    for entry in CATALOG {
        let on = entry.id == selection.option.as_str();
        dom::set_class(document, &panel::option_card_id(entry.id), SELECTED_CARD_CLASS, on);
    }
    dom::set_text(document, SELECTION_LABEL_ID, &panel::describe_selection(selection));
}
