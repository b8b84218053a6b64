pub mod accordion;
pub mod animator;
pub mod color;
pub mod contact_form;
pub mod field;
pub mod lazy_video;
pub mod notification;
pub mod particle;
pub mod utils;
pub mod video_sequence;
pub mod whatsapp;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Wires up every page feature when the wasm module loads. Each init checks
// for its own markup and no-ops when a section is absent, so the same bundle
// serves pages that only carry a subset of the widgets.
#[wasm_bindgen(start)]
pub fn initialize() -> Result<(), JsValue> {
    utils::set_panic_hook();

    animator::init()?;
    whatsapp::init()?;
    video_sequence::init()?;
    accordion::init()?;
    contact_form::init()?;
    lazy_video::init()?;

    Ok(())
}
