use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wrapview_core::{ApplyNotice, Configuration};

const APPLIED_ID: &str = "applied-overlay";
const SUMMARY_ID: &str = "summary-overlay";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(APPLIED_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(APPLIED_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Apply notice plus the pending browser timeout that will dismiss it.
#[derive(Default)]
pub struct NoticeState {
    pub notice: ApplyNotice,
    timeout: Option<i32>,
}

/// Show the notice and (re)arm its dismissal. A previous pending dismissal
/// is cancelled so the full window always runs from the latest click.
pub fn trigger_apply(state: &Rc<RefCell<NoticeState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let (ticket, ms) = {
        let mut st = state.borrow_mut();
        if let Some(handle) = st.timeout.take() {
            window.clear_timeout_with_handle(handle);
        }
        let ticket = st.notice.trigger(Instant::now());
        (ticket, st.notice.duration().as_millis() as i32)
    };
    if let Some(document) = window.document() {
        show(&document);
    }

    // Weak so a torn-down page leaves the callback with nothing to touch
    let weak = Rc::downgrade(state);
    let dismiss = Closure::once_into_js(move || {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let mut st = state.borrow_mut();
        if st.notice.expire(ticket) {
            st.timeout = None;
            if let Some(document) = dom::window_document() {
                hide(&document);
            }
        }
    });
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        dismiss.unchecked_ref::<js_sys::Function>(),
        ms,
    ) {
        Ok(handle) => state.borrow_mut().timeout = Some(handle),
        Err(e) => log::warn!("[apply] could not schedule dismiss: {:?}", e),
    }
}

/// Update the summary line with the current configuration
pub fn update_summary(document: &web::Document, config: &Configuration) {
    if let Some(el) = document.get_element_by_id(SUMMARY_ID) {
        let finish = config.finish.map(|f| f.label()).unwrap_or("Unset");
        let text = format!(
            "{} • {} • {} • {} • Decal: {} • Two-tone: {}",
            config.model.display_name(),
            config.primary_color,
            finish,
            config.material,
            config.decal,
            if config.two_tone { "on" } else { "off" },
        );
        el.set_text_content(Some(&text));
    }
}
