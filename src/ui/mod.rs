/// Page components, each wired independently against the document
use web_sys::Document;

use crate::config::PageConfig;

pub mod article_filter;
pub mod dom;
pub mod feedback;
pub mod menu;
pub mod share;
pub mod subscribe;
pub mod tabs;

/// Which components found their elements on this page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootReport {
    pub menu: bool,
    pub article_filter: bool,
    pub tabs: bool,
    pub share: bool,
    pub subscribe: bool,
}

impl BootReport {
    pub fn active_count(&self) -> usize {
        [self.menu, self.article_filter, self.tabs, self.share, self.subscribe]
            .iter()
            .filter(|active| **active)
            .count()
    }
}

impl std::fmt::Display for BootReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flag = |active: bool| if active { "on" } else { "off" };
        write!(
            f,
            "menu={} filter={} tabs={} share={} subscribe={}",
            flag(self.menu),
            flag(self.article_filter),
            flag(self.tabs),
            flag(self.share),
            flag(self.subscribe)
        )
    }
}

/// Wire every component present in `doc`
pub fn mount(doc: &Document, config: &PageConfig) -> BootReport {
    BootReport {
        menu: menu::init(doc, &config.menu),
        article_filter: article_filter::init(doc, &config.filter),
        tabs: tabs::init(doc, &config.tabs),
        share: share::init(doc, &config.share),
        subscribe: subscribe::init(doc, &config.subscribe),
    }
}
