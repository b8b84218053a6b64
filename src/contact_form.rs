// AJAX contact form: posts the form data in the background and reports the
// outcome through the notification modal instead of navigating away.

use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlButtonElement, HtmlFormElement};

use crate::notification::{self, Notice, NoticeKind};
use crate::utils;

const PROCESSING_LABEL: &str = "Procesando... <i class=\"fa-solid fa-spinner fa-spin\"></i>";

// Reply shape fixed by the form backend.
#[derive(Debug, Deserialize)]
pub struct SubmitReply {
    pub rpta: String,
    #[serde(default)]
    pub mensaje: Option<String>,
}

// The backend signals acceptance through rpta; everything else is a failure.
pub fn is_success(reply: &SubmitReply) -> bool {
    reply.rpta == "ok"
}

pub fn reply_notice(reply: &SubmitReply) -> Notice {
    if is_success(reply) {
        Notice {
            kind: NoticeKind::Success,
            title: "¡Excelente!".to_string(),
            message: reply.mensaje.clone().unwrap_or_else(|| {
                "Información enviada con éxito. Pronto nos contactaremos contigo."
                    .to_string()
            }),
        }
    } else {
        Notice {
            kind: NoticeKind::Error,
            title: "Algo ocurrió".to_string(),
            message: reply.mensaje.clone().unwrap_or_else(|| {
                "No pudimos procesar tu solicitud en este momento.".to_string()
            }),
        }
    }
}

pub fn failure_notice(detail: &str) -> Notice {
    Notice {
        kind: NoticeKind::Error,
        title: "Error de envío".to_string(),
        message: format!(
            "No se pudo enviar la información: {}. Por favor, verifica tu conexión o intenta más tarde.",
            detail
        ),
    }
}

async fn submit(action: String, data: FormData) -> Result<SubmitReply, gloo_net::Error> {
    let response = Request::post(&action).body(data)?.send().await?;
    if !response.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "Error de servidor: {}",
            response.status()
        )));
    }
    response.json::<SubmitReply>().await
}

pub fn init() -> Result<(), JsValue> {
    let document = utils::document()?;
    let form: HtmlFormElement = match utils::element_by_id(&document, "contact-form") {
        Some(form) => form,
        None => return Ok(()),
    };

    // Guard: only wire the form once even if init runs again.
    let dataset = form.dataset();
    if dataset.get("initialized").is_some() {
        return Ok(());
    }
    dataset.set("initialized", "true")?;

    let handler = {
        let form = form.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            event.stop_immediate_propagation();
            if let Err(err) = handle_submit(&form) {
                gloo_console::error!("contact form submission failed", err);
            }
        })
    };
    form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn handle_submit(form: &HtmlFormElement) -> Result<(), JsValue> {
    let submit_btn: HtmlButtonElement = match form
        .query_selector("button[type=\"submit\"]")?
        .and_then(|element| element.dyn_into().ok())
    {
        Some(button) => button,
        None => return Ok(()),
    };
    // A disabled button means a submission is already in flight.
    if submit_btn.disabled() {
        return Ok(());
    }

    let original_label = submit_btn.inner_html();
    submit_btn.set_disabled(true);
    submit_btn.set_inner_html(PROCESSING_LABEL);

    let data = FormData::new_with_form(form)?;
    let action = form.action();
    let form = form.clone();

    spawn_local(async move {
        let notice = match submit(action, data).await {
            Ok(reply) => {
                // An accepted submission clears the fields for the next one.
                if is_success(&reply) {
                    form.reset();
                }
                reply_notice(&reply)
            }
            Err(err) => {
                gloo_console::error!("Submission Error:", err.to_string());
                failure_notice(&err.to_string())
            }
        };
        if let Err(err) = notification::show(&notice) {
            gloo_console::error!("failed to show notification", err);
        }
        // Restore the button whatever the outcome.
        submit_btn.set_disabled(false);
        submit_btn.set_inner_html(&original_label);
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_an_ok_reply_clears_the_form() {
        // is_success drives both the notice kind and the form.reset() call
        // after a submission round-trips.
        let accepted: SubmitReply = serde_json::from_str(r#"{"rpta": "ok"}"#).unwrap();
        assert!(is_success(&accepted));
        let rejected: SubmitReply = serde_json::from_str(r#"{"rpta": "error"}"#).unwrap();
        assert!(!is_success(&rejected));
        let unexpected: SubmitReply = serde_json::from_str(r#"{"rpta": "OK"}"#).unwrap();
        assert!(!is_success(&unexpected));
    }

    #[test]
    fn ok_reply_is_a_success_notice() {
        let reply: SubmitReply =
            serde_json::from_str(r#"{"rpta": "ok", "mensaje": "Recibido"}"#).unwrap();
        let notice = reply_notice(&reply);
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.title, "¡Excelente!");
        assert_eq!(notice.message, "Recibido");
    }

    #[test]
    fn ok_reply_without_message_uses_the_default() {
        let reply: SubmitReply = serde_json::from_str(r#"{"rpta": "ok"}"#).unwrap();
        let notice = reply_notice(&reply);
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(notice.message.contains("Pronto nos contactaremos"));
    }

    #[test]
    fn non_ok_reply_is_an_error_notice() {
        let reply: SubmitReply =
            serde_json::from_str(r#"{"rpta": "fail", "mensaje": null}"#).unwrap();
        let notice = reply_notice(&reply);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Algo ocurrió");
        assert!(notice.message.contains("No pudimos procesar"));
    }

    #[test]
    fn failure_notice_carries_the_detail() {
        let notice = failure_notice("Error de servidor: 500");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Error de envío");
        assert!(notice.message.contains("Error de servidor: 500"));
        assert!(notice.message.contains("verifica tu conexión"));
    }
}
