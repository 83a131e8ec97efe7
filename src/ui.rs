//! Option buttons, two-tone toggle and Apply button.
//!
//! Buttons declare what they select through `data-field` / `data-value`
//! attributes, so the markup owns the option list and this module only
//! turns clicks into store selections.

use crate::dom;
use crate::overlay::{self, NoticeState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;
use wrapview_core::{ConfigurationStore, Selection};

const OPTION_SELECTOR: &str = "[data-field]";
const ACTIVE_CLASS: &str = "active";

pub fn wire_controls(
    document: &web::Document,
    store: &Rc<RefCell<ConfigurationStore>>,
    notice: &Rc<RefCell<NoticeState>>,
) {
    wire_option_buttons(document, store);

    let store_toggle = store.clone();
    dom::add_click_listener(document, "two-tone", move || {
        let on = store_toggle.borrow_mut().toggle_two_tone();
        log::info!("[ui] two-tone {}", if on { "enabled" } else { "disabled" });
        refresh_after_change(&store_toggle);
    });

    let notice_apply = notice.clone();
    dom::add_click_listener(document, "apply-button", move || {
        log::info!("[ui] apply");
        overlay::trigger_apply(&notice_apply);
    });

    refresh(document, &store.borrow());
}

fn wire_option_buttons(document: &web::Document, store: &Rc<RefCell<ConfigurationStore>>) {
    let buttons = dom::query_all(document, OPTION_SELECTOR);
    log::info!("[ui] wiring {} option buttons", buttons.len());
    for el in buttons {
        let (Some(field), Some(value)) = (el.get_attribute("data-field"), el.get_attribute("data-value"))
        else {
            continue;
        };
        let store = store.clone();
        dom::on_click(&el, move || on_selection(&store, &field, &value));
    }
}

fn on_selection(store: &Rc<RefCell<ConfigurationStore>>, field: &str, value: &str) {
    match Selection::parse(field, value) {
        Ok(selection) => {
            if store.borrow_mut().apply(selection) {
                log::info!("[ui] {} = {}", field, value);
            }
            refresh_after_change(store);
        }
        Err(e) => log::warn!("[ui] ignored selection: {}", e),
    }
}

fn refresh_after_change(store: &Rc<RefCell<ConfigurationStore>>) {
    if let Some(document) = dom::window_document() {
        refresh(&document, &store.borrow());
    }
}

/// Highlight the active option in every group and refresh the summary.
pub fn refresh(document: &web::Document, store: &ConfigurationStore) {
    let config = store.config();
    for el in dom::query_all(document, OPTION_SELECTOR) {
        let active = match (el.get_attribute("data-field"), el.get_attribute("data-value")) {
            (Some(field), Some(value)) => Selection::parse(&field, &value)
                .map(|s| s.is_current(config))
                .unwrap_or(false),
            _ => false,
        };
        dom::set_class(&el, ACTIVE_CLASS, active);
    }
    if let Some(el) = document.get_element_by_id("two-tone") {
        dom::set_class(&el, ACTIVE_CLASS, config.two_tone);
        el.set_text_content(Some(if config.two_tone { "Enabled" } else { "Disabled" }));
    }
    overlay::update_summary(document, config);
}
