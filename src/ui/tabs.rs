/// Profile page tab switching

use std::rc::Rc;

use web_sys::{Document, Element};

use super::dom;
use crate::config::TabsConfig;
use crate::selection::{exclusive_selection, tab_panel_id};

struct TabSet {
    doc: Document,
    triggers: Vec<Element>,
    panels: Vec<Element>,
    config: TabsConfig,
}

impl TabSet {
    fn select(&self, index: usize) {
        let Some(trigger) = self.triggers.get(index) else {
            return;
        };
        let panel = trigger
            .get_attribute("data-tab")
            .and_then(|key| tab_panel_id(&self.config.panel_id_prefix, &key))
            .and_then(|id| dom::by_id(&self.doc, &id));
        let Some(panel) = panel else {
            log::debug!("Tab trigger {} has no panel", index);
            return;
        };

        let flags = exclusive_selection(self.triggers.len(), index);
        for (trigger, selected) in self.triggers.iter().zip(flags) {
            if selected {
                dom::remove_classes(trigger, &self.config.deselected_classes);
                dom::add_classes(trigger, &self.config.selected_classes);
            } else {
                dom::remove_classes(trigger, &self.config.selected_classes);
                dom::add_classes(trigger, &self.config.deselected_classes);
            }
        }

        for other in &self.panels {
            dom::set_hidden(other, true);
        }
        dom::set_hidden(&panel, false);
    }
}

/// Wire tab triggers. Returns false when the page has no tabs.
pub fn init(doc: &Document, config: &TabsConfig) -> bool {
    let triggers = dom::query_all(doc, &config.trigger_selector);
    if triggers.is_empty() {
        return false;
    }

    let tabs = Rc::new(TabSet {
        doc: doc.clone(),
        panels: dom::query_all(doc, &config.panel_selector),
        triggers,
        config: config.clone(),
    });

    for (index, trigger) in tabs.triggers.iter().enumerate() {
        let tabs = tabs.clone();
        dom::listen(trigger, "click", move |_| tabs.select(index));
    }

    true
}
