// Scroll-driven playback: the looping background videos only play while their
// section is on screen, via IntersectionObserver.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Element, HtmlVideoElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::utils;

const OBSERVER_THRESHOLD: f64 = 0.1;

const SECTIONS: [(&str, &str, &str); 2] = [
    ("bg-video-pain", ".section-pain-points", "Pain"),
    ("bg-video-personas", ".section-personas", "Personas"),
];

pub fn init() -> Result<(), JsValue> {
    let document = utils::document()?;
    for &(video_id, section_selector, label) in SECTIONS.iter() {
        let video: HtmlVideoElement = match utils::element_by_id(&document, video_id) {
            Some(video) => video,
            None => continue,
        };
        let section = match document.query_selector(section_selector)? {
            Some(section) => section,
            None => continue,
        };
        observe(video, &section, label)?;
    }
    Ok(())
}

fn observe(video: HtmlVideoElement, section: &Element, label: &'static str) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                Ok(entry) => entry,
                Err(_) => continue,
            };
            if entry.is_intersecting() {
                if video.paused() {
                    play_logged(&video, label);
                }
            } else if !video.paused() {
                let _ = video.pause();
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(section);
    callback.forget();
    Ok(())
}

// Autoplay can be refused by the browser; log it and move on.
fn play_logged(video: &HtmlVideoElement, label: &'static str) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                gloo_console::log!(format!("{} video play prevented:", label), err);
            }
        }),
        Err(err) => gloo_console::log!(format!("{} video play prevented:", label), err),
    }
}
