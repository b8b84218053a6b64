// Three-video modal funnel: the visitor watches each Vimeo clip in turn and
// the final call to action hands off to the WhatsApp chat.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlIFrameElement};

use crate::utils;
use crate::whatsapp;

pub const VIDEOS: [&str; 3] = ["1150436654", "1150437188", "1150444943"];

pub const COMPLETION_MESSAGE: &str = "Hola, he visto los 3 videos y quiero iniciar ya.";

pub fn embed_url(step: usize) -> String {
    format!("https://player.vimeo.com/video/{}?autoplay=1", VIDEOS[step])
}

pub fn status_text(step: usize) -> String {
    format!("Video {} de {}", step + 1, VIDEOS.len())
}

pub fn is_last(step: usize) -> bool {
    step == VIDEOS.len() - 1
}

pub fn action_label(step: usize) -> &'static str {
    if is_last(step) {
        "Quiero iniciar ya <i class=\"fa-brands fa-whatsapp\"></i>"
    } else {
        "Quiero ver el siguiente vídeo <i class=\"fa-solid fa-arrow-right\"></i>"
    }
}

struct ModalParts {
    modal: HtmlElement,
    iframe: HtmlIFrameElement,
    action_btn: HtmlElement,
    status_text: HtmlElement,
}

impl ModalParts {
    fn load(&self, step: usize) {
        self.iframe.set_src(&embed_url(step));
        self.status_text.set_inner_text(&status_text(step));
        self.action_btn.set_inner_html(action_label(step));
    }

    fn open(&self, step: &Cell<usize>) {
        step.set(0);
        let _ = self.modal.class_list().add_1("show-modal");
        self.load(0);
    }

    // Clearing the iframe src is what actually stops playback.
    fn close(&self) {
        let _ = self.modal.class_list().remove_1("show-modal");
        self.iframe.set_src("");
    }
}

pub fn init() -> Result<(), JsValue> {
    let document = utils::document()?;

    let modal: HtmlElement = match utils::element_by_id(&document, "video-modal") {
        Some(element) => element,
        None => return Ok(()),
    };
    let iframe: HtmlIFrameElement = match utils::element_by_id(&document, "video-frame") {
        Some(element) => element,
        None => return Ok(()),
    };
    let start_btn: HtmlElement = match utils::element_by_id(&document, "start-video-sequence") {
        Some(element) => element,
        None => return Ok(()),
    };
    let close_btn: HtmlElement = match utils::element_by_id(&document, "close-modal-btn") {
        Some(element) => element,
        None => return Ok(()),
    };
    let action_btn: HtmlElement = match utils::element_by_id(&document, "modal-action-btn") {
        Some(element) => element,
        None => return Ok(()),
    };
    let status_text: HtmlElement = match utils::element_by_id(&document, "modal-status-text") {
        Some(element) => element,
        None => return Ok(()),
    };

    let parts = Rc::new(ModalParts {
        modal,
        iframe,
        action_btn,
        status_text,
    });
    let step = Rc::new(Cell::new(0usize));

    register_opener(&start_btn, &parts, &step)?;
    // Secondary entry points further down the page; both are optional markup.
    for &id in ["pain-points-video-btn", "personas-video-btn"].iter() {
        if let Some(button) = utils::element_by_id::<HtmlElement>(&document, id) {
            register_opener(&button, &parts, &step)?;
        }
    }

    {
        let parts = parts.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            parts.close();
        });
        close_btn.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    // Close on background click, but only when the backdrop itself is hit.
    {
        let handler_parts = parts.clone();
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if let Some(target) = event.target() {
                if js_sys::Object::is(target.as_ref(), handler_parts.modal.as_ref()) {
                    handler_parts.close();
                }
            }
        });
        parts
            .modal
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    {
        let handler_parts = parts.clone();
        let step = step.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            let current = step.get();
            if !is_last(current) {
                step.set(current + 1);
                handler_parts.load(current + 1);
            } else {
                let mobile = utils::window()
                    .and_then(|window| window.navigator().user_agent())
                    .map(|user_agent| whatsapp::is_mobile(&user_agent))
                    .unwrap_or(false);
                let url = whatsapp::chat_url_with_text(mobile, COMPLETION_MESSAGE);
                if let Err(err) = whatsapp::open_chat(&url) {
                    gloo_console::error!("failed to open WhatsApp chat", err);
                }
                handler_parts.close();
            }
        });
        parts
            .action_btn
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    Ok(())
}

fn register_opener(
    button: &HtmlElement,
    parts: &Rc<ModalParts>,
    step: &Rc<Cell<usize>>,
) -> Result<(), JsValue> {
    let parts = parts.clone();
    let step = step.clone();
    let handler = Closure::<dyn FnMut()>::new(move || {
        parts.open(&step);
    });
    button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}
