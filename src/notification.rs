// Success / error notice modal, shared by the contact form flow.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::utils;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn icon_html(self) -> &'static str {
        match self {
            NoticeKind::Success => {
                "<i class=\"fa-solid fa-circle-check\" style=\"color: #22c55e;\"></i>"
            }
            NoticeKind::Error => {
                "<i class=\"fa-solid fa-circle-exclamation\" style=\"color: #ef4444;\"></i>"
            }
        }
    }

    pub fn title_color(self) -> &'static str {
        match self {
            NoticeKind::Success => "#16a34a",
            NoticeKind::Error => "#dc2626",
        }
    }
}

// A notice ready to display.
#[derive(Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

// Populates and opens the notification modal. Missing markup is a silent
// no-op; the page works without the chrome.
pub fn show(notice: &Notice) -> Result<(), JsValue> {
    let document = utils::document()?;
    let modal: HtmlElement = match utils::element_by_id(&document, "notification-modal") {
        Some(modal) => modal,
        None => return Ok(()),
    };

    if let Some(icon) = utils::element_by_id::<Element>(&document, "notification-icon") {
        icon.set_inner_html(notice.kind.icon_html());
    }
    if let Some(title) = utils::element_by_id::<HtmlElement>(&document, "notification-title") {
        title.style().set_property("color", notice.kind.title_color())?;
        title.set_inner_text(&notice.title);
    }
    if let Some(message) = utils::element_by_id::<HtmlElement>(&document, "notification-message") {
        message.set_inner_text(&notice.message);
    }

    modal.class_list().add_1("show-modal")?;

    // Close handlers are re-bound on every show; assigning through onclick
    // replaces the previous binding instead of stacking listeners.
    if let Some(close_btn) = utils::element_by_id::<HtmlElement>(&document, "notification-close-btn")
    {
        let modal = modal.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            let _ = modal.class_list().remove_1("show-modal");
        });
        close_btn.set_onclick(Some(handler.as_ref().unchecked_ref()));
        handler.forget();
    }

    {
        let modal_handle = modal.clone();
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if let Some(target) = event.target() {
                if js_sys::Object::is(target.as_ref(), modal_handle.as_ref()) {
                    let _ = modal_handle.class_list().remove_1("show-modal");
                }
            }
        });
        modal.set_onclick(Some(handler.as_ref().unchecked_ref()));
        handler.forget();
    }

    Ok(())
}
