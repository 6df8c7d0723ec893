/// Share button: Web Share API with a clipboard fallback

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::Document;

use super::dom;
use super::feedback::FeedbackSlot;
use crate::config::ShareConfig;
use crate::error::{Error, Result};

/// Look up `owner[name]` as a callable, if the platform provides it
fn method(owner: &JsValue, name: &str) -> Option<js_sys::Function> {
    if owner.is_undefined() || owner.is_null() {
        return None;
    }
    js_sys::Reflect::get(owner, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

async fn await_call(owner: &JsValue, function: &js_sys::Function, arg: &JsValue) -> Result<()> {
    let promise = function.call1(owner, arg)?.dyn_into::<js_sys::Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}

fn navigator() -> Option<JsValue> {
    web_sys::window().map(|w| JsValue::from(w.navigator()))
}

/// Invoke `navigator.share`. Returns `Ok(false)` when the API is missing.
async fn native_share(title: &str, url: &str) -> Result<bool> {
    let Some(nav) = navigator() else {
        return Ok(false);
    };
    let Some(share) = method(&nav, "share") else {
        return Ok(false);
    };

    let data = js_sys::Object::new();
    js_sys::Reflect::set(&data, &"title".into(), &title.into())?;
    js_sys::Reflect::set(&data, &"url".into(), &url.into())?;
    await_call(&nav, &share, &data).await?;
    Ok(true)
}

async fn copy_to_clipboard(text: &str) -> Result<()> {
    let nav = navigator().ok_or(Error::Unsupported("navigator"))?;
    let clipboard = js_sys::Reflect::get(&nav, &"clipboard".into())?;
    let write_text = method(&clipboard, "writeText").ok_or(Error::Unsupported("clipboard"))?;
    await_call(&clipboard, &write_text, &JsValue::from_str(text)).await
}

async fn share_page(doc: Document, slot: FeedbackSlot, config: ShareConfig) -> Result<()> {
    let url = doc
        .location()
        .ok_or(Error::Unsupported("location"))?
        .href()?;

    if native_share(&doc.title(), &url).await? {
        return Ok(());
    }

    copy_to_clipboard(&url).await?;
    let classes = vec![config.copied_class.clone()];
    let token = slot.show(&config.copied_text, &classes);
    slot.revert_after(token, config.feedback_ms, classes, || {});
    Ok(())
}

/// Wire the share button. Returns false when the page has none.
pub fn init(doc: &Document, config: &ShareConfig) -> bool {
    let Some(button) = dom::query_document(doc, &config.trigger_selector) else {
        return false;
    };

    let slot = FeedbackSlot::new(button.clone());
    let doc = doc.clone();
    let config = config.clone();

    dom::listen(&button, "click", move |_| {
        let doc = doc.clone();
        let slot = slot.clone();
        let config = config.clone();
        spawn_local(async move {
            // Cancelled share dialogs and denied clipboard access land here
            if let Err(e) = share_page(doc, slot, config).await {
                log::debug!("Share failed: {}", e);
            }
        });
    });

    true
}
