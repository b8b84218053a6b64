// WhatsApp deep links: wa.me on phones, web.whatsapp.com everywhere else,
// picked by a user agent sniff. Buttons marked .contact-trigger open the chat
// directly unless they sit inside a form, in which case they keep submitting.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::utils;

pub const PHONE_NUMBER: &str = "51929838465";

const MOBILE_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

pub fn is_mobile(user_agent: &str) -> bool {
    let user_agent = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS
        .iter()
        .any(|marker| user_agent.contains(*marker))
}

pub fn chat_url(mobile: bool) -> String {
    if mobile {
        format!("https://wa.me/{}", PHONE_NUMBER)
    } else {
        format!("https://web.whatsapp.com/send?phone={}", PHONE_NUMBER)
    }
}

// Deep link with a prefilled message. The text is interpolated as-is; the
// browser percent-encodes it on navigation.
pub fn chat_url_with_text(mobile: bool, text: &str) -> String {
    if mobile {
        format!("https://wa.me/{}?text={}", PHONE_NUMBER, text)
    } else {
        format!(
            "https://web.whatsapp.com/send?phone={}&text={}",
            PHONE_NUMBER, text
        )
    }
}

pub fn open_chat(url: &str) -> Result<(), JsValue> {
    utils::window()?.open_with_url_and_target(url, "_blank")?;
    Ok(())
}

pub fn init() -> Result<(), JsValue> {
    let document = utils::document()?;
    let user_agent = utils::window()?.navigator().user_agent()?;
    let url = chat_url(is_mobile(&user_agent));

    let triggers = document.query_selector_all(".contact-trigger")?;
    for index in 0..triggers.length() {
        let element = match triggers
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            Some(element) => element,
            None => continue,
        };
        let url = url.clone();
        let target = element.clone();
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            // A trigger inside a form keeps its default submit behavior.
            match target.closest("form") {
                Ok(None) => {
                    event.prevent_default();
                    if let Err(err) = open_chat(&url) {
                        gloo_console::error!("failed to open WhatsApp chat", err);
                    }
                }
                Ok(Some(_)) => {}
                Err(err) => gloo_console::error!("contact trigger lookup failed", err),
            }
        });
        element.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }
    Ok(())
}
