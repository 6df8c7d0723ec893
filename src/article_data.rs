/// Data structures for the article list
use serde::{Deserialize, Serialize};

/// Sentinel tag value meaning "no tag filter"
pub const ALL_TAGS: &str = "all";

/// A single article card as described by its data attributes
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArticleCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ArticleCard {
    pub fn new(title: String, description: String, tags: Vec<String>) -> ArticleCard {
        ArticleCard {
            title,
            description,
            tags,
        }
    }

    /// Build a card from the raw `data-title`, `data-desc` and `data-tags` values.
    /// Missing attributes read as empty.
    pub fn from_attributes(
        title: Option<&str>,
        description: Option<&str>,
        tags: Option<&str>,
    ) -> ArticleCard {
        ArticleCard {
            title: title.unwrap_or_default().to_string(),
            description: description.unwrap_or_default().to_string(),
            tags: tags.map(parse_tags).unwrap_or_default(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Split a comma separated tag list, dropping blank entries
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// The currently selected tag filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveTag {
    #[default]
    All,
    Tag(String),
}

impl ActiveTag {
    /// Interpret a `data-tag` value. Missing, blank or `all` select everything.
    pub fn from_attribute(value: Option<&str>) -> ActiveTag {
        match value.map(str::trim) {
            None | Some("") | Some(ALL_TAGS) => ActiveTag::All,
            Some(tag) => ActiveTag::Tag(tag.to_string()),
        }
    }
}
