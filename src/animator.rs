// Canvas wiring for the particle field: sizes the canvas to the viewport,
// tracks window resizes, and drives the clear/advance/draw/reschedule cycle
// off requestAnimationFrame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color;
use crate::field::ParticleField;
use crate::utils;

const CANVAS_ID: &str = "ai-canvas";

pub fn init() -> Result<(), JsValue> {
    let document = utils::document()?;
    // Decorative only: without the canvas there is nothing to animate.
    let canvas: HtmlCanvasElement = match utils::element_by_id(&document, CANVAS_ID) {
        Some(canvas) => canvas,
        None => return Ok(()),
    };
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let (width, height) = viewport_size()?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let field = Rc::new(RefCell::new(ParticleField::new(width, height)));
    register_resize_handler(&canvas, &field)?;

    let running = Rc::new(Cell::new(true));
    register_pagehide_handler(&running)?;

    // Self-perpetuating frame loop: the closure holds a handle to itself so
    // it can request the next frame from within the current one.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = frame.clone();
    {
        let frame = frame.clone();
        *first.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            if !running.get() {
                // Page is going away; drop the closure so the loop ends.
                let _ = frame.borrow_mut().take();
                return;
            }
            {
                let mut field = field.borrow_mut();
                field.advance();
                draw(&context, &field);
            }
            if let Some(callback) = frame.borrow().as_ref() {
                if let Err(err) = request_animation_frame(callback) {
                    gloo_console::error!("failed to schedule animation frame", err);
                }
            }
        }));
    }
    if let Some(callback) = first.borrow().as_ref() {
        request_animation_frame(callback)?;
    }
    Ok(())
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
    utils::window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map(|_handle| ())
}

fn viewport_size() -> Result<(f64, f64), JsValue> {
    let window = utils::window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

// The resize handler only re-dimensions the canvas and the field. It never
// re-randomizes the collection, so after a shrink some particles may sit
// outside the new bounds until their own bounces bring them back.
fn register_resize_handler(
    canvas: &HtmlCanvasElement,
    field: &Rc<RefCell<ParticleField>>,
) -> Result<(), JsValue> {
    let canvas = canvas.clone();
    let field = field.clone();
    let handler = Closure::<dyn FnMut()>::new(move || match viewport_size() {
        Ok((width, height)) => {
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            field.borrow_mut().resize(width, height);
        }
        Err(err) => gloo_console::error!("resize handler failed", err),
    });
    utils::window()?.add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

// Stop flag checked before each reschedule, flipped when the page is being
// torn down. Changes nothing observable while the page is alive.
fn register_pagehide_handler(running: &Rc<Cell<bool>>) -> Result<(), JsValue> {
    let running = running.clone();
    let handler = Closure::<dyn FnMut()>::new(move || {
        running.set(false);
    });
    utils::window()?
        .add_event_listener_with_callback("pagehide", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

#[allow(deprecated)]
fn draw(context: &CanvasRenderingContext2d, field: &ParticleField) {
    context.clear_rect(0.0, 0.0, field.width(), field.height());

    for particle in field.particles() {
        context.begin_path();
        let _ = context.arc(
            particle.pos[0],
            particle.pos[1],
            particle.radius,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        context.set_fill_style(&JsValue::from_str(&color::ACCENT.rgba(0.5)));
        context.fill();
    }

    for connection in field.connections() {
        context.begin_path();
        context.set_stroke_style(&JsValue::from_str(&color::ACCENT.rgba(connection.opacity)));
        context.set_line_width(1.0);
        context.move_to(connection.from[0], connection.from[1]);
        context.line_to(connection.to[0], connection.to[1]);
        context.stroke();
    }
}
