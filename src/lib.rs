/// Dev/Blog page interactions
/// Built with Rust + WASM: menu toggle, article filtering, profile tabs,
/// share button and the subscribe form.

mod article_data;
pub mod config;
pub mod error;
mod filter;
mod selection;
mod subscription;
pub mod ui;

pub use article_data::{ActiveTag, ArticleCard};
pub use config::PageConfig;
pub use filter::{FilterOutcome, filter_cards};
pub use subscription::SubscribeOutcome;
pub use ui::BootReport;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlScriptElement};

// Set up panic hook and logging, then wire the page
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let Some(doc) = ui::dom::document() else {
        log::warn!("No document available; page interactions disabled");
        return;
    };

    if doc.ready_state() == "loading" {
        let ready_doc = doc.clone();
        let on_ready = Closure::once(move || {
            boot(&ready_doc);
        });
        if let Err(e) = doc.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        ) {
            log::warn!("Failed to wait for DOMContentLoaded: {:?}", e);
            return;
        }
        on_ready.forget();
    } else {
        boot(&doc);
    }
}

/// Read the inline configuration block, falling back to defaults
fn load_config(doc: &Document) -> PageConfig {
    let Some(text) = ui::dom::by_id(doc, config::CONFIG_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
        .and_then(|script| script.text().ok())
    else {
        return PageConfig::default();
    };

    PageConfig::from_json(&text).unwrap_or_else(|e| {
        log::warn!("Ignoring page configuration: {}", e);
        PageConfig::default()
    })
}

/// Wire all components against `doc` and report which ones are active
pub fn boot(doc: &Document) -> BootReport {
    let config = load_config(doc);
    let report = ui::mount(doc, &config);
    log::info!("Page interactions ready ({} active): {}", report.active_count(), report);
    report
}

// Re-export the filter predicates for JavaScript access
#[wasm_bindgen]
pub fn article_matches(
    title: &str,
    description: &str,
    tags: &str,
    query: &str,
    active_tag: &str,
) -> bool {
    let card = ArticleCard::from_attributes(Some(title), Some(description), Some(tags));
    let outcome = filter_cards(
        std::slice::from_ref(&card),
        query,
        &ActiveTag::from_attribute(Some(active_tag)),
    );
    outcome.visible_count == 1
}

/// Filter an array of `{title, description, tags}` objects and return
/// `{visible, visible_count}`
#[wasm_bindgen]
pub fn filter_articles(cards: JsValue, query: &str, active_tag: &str) -> Result<JsValue, JsValue> {
    let cards: Vec<ArticleCard> = serde_wasm_bindgen::from_value(cards)?;
    let outcome = filter_cards(&cards, query, &ActiveTag::from_attribute(Some(active_tag)));
    Ok(serde_wasm_bindgen::to_value(&outcome)?)
}
