/// Article search and tag filtering on the articles page

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::dom;
use crate::article_data::{ActiveTag, ArticleCard};
use crate::config::FilterConfig;
use crate::filter::filter_cards;
use crate::selection::exclusive_selection;

struct ArticleFilter {
    search_input: HtmlInputElement,
    grid: Element,
    results_count: Option<Element>,
    empty_state: Option<Element>,
    /// Card elements and the data read from them at setup, index aligned
    card_elements: Vec<Element>,
    cards: Vec<ArticleCard>,
    active_tag: ActiveTag,
}

impl ArticleFilter {
    fn run(&self) {
        let outcome = filter_cards(&self.cards, &self.search_input.value(), &self.active_tag);

        for (element, visible) in self.card_elements.iter().zip(&outcome.visible) {
            dom::set_hidden(element, !visible);
        }

        if let Some(count) = &self.results_count {
            count.set_text_content(Some(&outcome.visible_count.to_string()));
        }
        if let Some(empty) = &self.empty_state {
            dom::set_hidden(empty, !outcome.is_empty());
        }
        dom::set_hidden(&self.grid, outcome.is_empty());
    }
}

fn read_card(element: &Element) -> ArticleCard {
    ArticleCard::from_attributes(
        element.get_attribute("data-title").as_deref(),
        element.get_attribute("data-desc").as_deref(),
        element.get_attribute("data-tags").as_deref(),
    )
}

/// Wire search input and tag filters. Returns false when the page has no
/// article list.
pub fn init(doc: &Document, config: &FilterConfig) -> bool {
    let search_input = dom::by_id(doc, &config.search_input_id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let grid = dom::by_id(doc, &config.grid_id);

    let (Some(search_input), Some(grid)) = (search_input, grid) else {
        return false;
    };

    let card_elements = dom::query_all(doc, &config.card_selector);
    let cards: Vec<ArticleCard> = card_elements.iter().map(read_card).collect();
    log::debug!("Article filter tracking {} cards", cards.len());

    let filter = Rc::new(RefCell::new(ArticleFilter {
        search_input: search_input.clone(),
        grid,
        results_count: dom::by_id(doc, &config.results_count_id),
        empty_state: dom::by_id(doc, &config.empty_state_id),
        card_elements,
        cards,
        active_tag: ActiveTag::All,
    }));

    {
        let filter = filter.clone();
        dom::listen(&search_input, "input", move |_| {
            filter.borrow().run();
        });
    }

    let tag_filters = Rc::new(dom::query_all(doc, &config.tag_filter_selector));
    for (index, control) in tag_filters.iter().enumerate() {
        let filter = filter.clone();
        let tag_filters = tag_filters.clone();
        let active_class = config.active_class.clone();

        dom::listen(control, "click", move |_| {
            let flags = exclusive_selection(tag_filters.len(), index);
            for (other, active) in tag_filters.iter().zip(flags) {
                let _ = other.class_list().toggle_with_force(&active_class, active);
            }

            let clicked = &tag_filters[index];
            let tag = ActiveTag::from_attribute(clicked.get_attribute("data-tag").as_deref());
            let mut state = filter.borrow_mut();
            state.active_tag = tag;
            state.run();
        });
    }

    true
}
