/// Newsletter subscription form submitted in the background

use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use super::dom;
use super::feedback::FeedbackSlot;
use crate::config::SubscribeConfig;
use crate::error::Result;
use crate::subscription::{SubscribeOutcome, encode_form};

struct SubscribeForm {
    form: HtmlFormElement,
    button: HtmlButtonElement,
    email: HtmlInputElement,
    slot: FeedbackSlot,
    config: SubscribeConfig,
}

impl SubscribeForm {
    fn csrf_token(&self) -> Option<String> {
        let selector = format!("[name=\"{}\"]", self.config.csrf_field);
        dom::query(&self.form, &selector)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
    }

    async fn send(&self, body: String) -> Result<String> {
        let response = Request::post(&self.form.action())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)?
            .send()
            .await?;
        if !response.ok() {
            log::debug!("Subscribe endpoint answered HTTP {}", response.status());
        }
        Ok(response.text().await?)
    }

    /// Disable the button and show the pending text before the request starts
    fn begin(&self) {
        self.button.set_disabled(true);
        self.slot.show(&self.config.pending_text, &[]);
    }

    async fn submit(self: Rc<Self>) {
        let body = encode_form(&self.config, &self.email.value(), self.csrf_token().as_deref());
        let outcome = match self.send(body).await {
            Ok(text) => SubscribeOutcome::from_body(&text),
            Err(e) => {
                log::debug!("Subscribe request failed: {}", e);
                SubscribeOutcome::NetworkError
            }
        };

        let classes = if outcome.is_success() {
            self.config.success_classes.clone()
        } else {
            Vec::new()
        };
        let token = self.slot.show(outcome.label(&self.config), &classes);

        let form = self.clone();
        let success = outcome.is_success();
        self.slot.revert_after(token, self.config.feedback_ms, classes, move || {
            form.button.set_disabled(false);
            if success {
                form.form.reset();
            }
        });
    }
}

/// Wire the subscribe form. Returns false when the page has no form or the
/// form lacks its submit button or email field.
pub fn init(doc: &Document, config: &SubscribeConfig) -> bool {
    let Some(form) = dom::by_id(doc, &config.form_id)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return false;
    };
    let button = dom::query(&form, &config.button_selector)
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let email = dom::query(&form, &config.email_selector)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let (Some(button), Some(email)) = (button, email) else {
        log::debug!("Subscribe form is missing its button or email field");
        return false;
    };

    let handler = Rc::new(SubscribeForm {
        slot: FeedbackSlot::new(button.clone().into()),
        form: form.clone(),
        button,
        email,
        config: config.clone(),
    });

    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        handler.begin();
        spawn_local(handler.clone().submit());
    });

    true
}
