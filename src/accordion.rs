// FAQ accordion: opening one item folds the rest.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::utils;

pub fn init() -> Result<(), JsValue> {
    let document = utils::document()?;
    let list = document.query_selector_all(".accordion-item")?;

    let mut items = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(element) = list
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            items.push(element);
        }
    }

    for item in &items {
        let header = match item.query_selector(".accordion-header")? {
            Some(header) => header,
            None => continue,
        };
        let item = item.clone();
        let items = items.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            for other in &items {
                if !js_sys::Object::is(other.as_ref(), item.as_ref()) {
                    let _ = other.class_list().remove_1("active");
                }
            }
            let _ = item.class_list().toggle("active");
        });
        header.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }
    Ok(())
}
