/// Mobile navigation menu toggle

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::dom;
use crate::config::{MenuCandidate, MenuConfig};
use crate::selection::MenuState;

/// Resolve the first candidate whose toggle exists. The panel must exist
/// for that same candidate, otherwise the menu is absent from the page.
fn resolve(doc: &Document, candidates: &[MenuCandidate]) -> Option<(Element, Element)> {
    let candidate = candidates
        .iter()
        .find(|c| dom::by_id(doc, &c.toggle_id).is_some())?;
    let toggle = dom::by_id(doc, &candidate.toggle_id)?;
    let panel = dom::by_id(doc, &candidate.panel_id)?;
    Some((toggle, panel))
}

fn apply(state: MenuState, toggle: &Element, panel: &Element, icons: Option<&(Element, Element)>) {
    dom::set_hidden(panel, !state.is_open());
    let _ = toggle.set_attribute("aria-expanded", state.aria_expanded());

    if let Some((open_icon, close_icon)) = icons {
        let (open_hidden, close_hidden) = state.icon_visibility();
        dom::set_hidden(open_icon, open_hidden);
        dom::set_hidden(close_icon, close_hidden);
    }
}

/// Wire the menu toggle. Returns false when the page has no menu.
pub fn init(doc: &Document, config: &MenuConfig) -> bool {
    let Some((toggle, panel)) = resolve(doc, &config.candidates) else {
        return false;
    };

    let icons = match (
        dom::query(&toggle, &config.open_icon_selector),
        dom::query(&toggle, &config.close_icon_selector),
    ) {
        (Some(open_icon), Some(close_icon)) => Some((open_icon, close_icon)),
        _ => None,
    };

    let state = Rc::new(Cell::new(MenuState::from_hidden(dom::is_hidden(&panel))));

    let target = toggle.clone();
    dom::listen(&target, "click", move |_| {
        let next = state.get().toggled();
        state.set(next);
        apply(next, &toggle, &panel, icons.as_ref());
    });

    true
}
