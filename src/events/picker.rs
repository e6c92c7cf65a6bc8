use crate::dom;
use crate::panel;
use showroom_core::{Showroom, CATALOG};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// One click listener per catalog card; a click makes that option current.
pub fn wire_option_cards(document: &web::Document, showroom: &Rc<RefCell<Showroom>>) {
    for entry in CATALOG {
        let showroom = showroom.clone();
        let id = entry.id;
        dom::add_click_listener(document, &panel::option_card_id(id), move || {
            if let Err(e) = showroom.borrow_mut().select_option(id) {
                log::warn!("[picker] {}", e);
            }
        });
    }
}
