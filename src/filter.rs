/// Article filtering logic: search text and tag predicates
use serde::Serialize;

use crate::article_data::{ActiveTag, ArticleCard};

/// Result of one filter pass over the card list
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterOutcome {
    /// Visibility per card, in input order
    pub visible: Vec<bool>,
    pub visible_count: usize,
}

impl FilterOutcome {
    /// Nothing matched: the empty state replaces the grid
    pub fn is_empty(&self) -> bool {
        self.visible_count == 0
    }
}

/// Normalize raw input text into a search query
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True if the (already normalized) query is empty or appears in the
/// title or description, ignoring case.
pub fn matches_search(card: &ArticleCard, query: &str) -> bool {
    query.is_empty()
        || card.title.to_lowercase().contains(query)
        || card.description.to_lowercase().contains(query)
}

pub fn matches_tag(card: &ArticleCard, active: &ActiveTag) -> bool {
    match active {
        ActiveTag::All => true,
        ActiveTag::Tag(tag) => card.has_tag(tag),
    }
}

pub fn is_visible(card: &ArticleCard, query: &str, active: &ActiveTag) -> bool {
    matches_search(card, query) && matches_tag(card, active)
}

/// Recompute visibility for every card from the raw input text and active tag
pub fn filter_cards(cards: &[ArticleCard], raw_query: &str, active: &ActiveTag) -> FilterOutcome {
    let query = normalize_query(raw_query);

    let visible: Vec<bool> = cards
        .iter()
        .map(|card| is_visible(card, &query, active))
        .collect();
    let visible_count = visible.iter().filter(|v| **v).count();

    FilterOutcome {
        visible,
        visible_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article_data::parse_tags;

    fn card(title: &str, desc: &str, tags: &str) -> ArticleCard {
        ArticleCard::new(title.to_string(), desc.to_string(), parse_tags(tags))
    }

    fn sample_cards() -> Vec<ArticleCard> {
        vec![
            card("Go concurrency", "", "go,concurrency"),
            card("Rust memory", "", "rust,memory"),
        ]
    }

    #[test]
    fn test_query_matches_title() {
        let outcome = filter_cards(&sample_cards(), "go", &ActiveTag::All);

        assert_eq!(outcome.visible, vec![true, false]);
        assert_eq!(outcome.visible_count, 1);
        assert!(!outcome.is_empty());
    }

    #[test]
    fn test_tag_only() {
        let outcome = filter_cards(
            &sample_cards(),
            "",
            &ActiveTag::Tag("memory".to_string()),
        );

        assert_eq!(outcome.visible, vec![false, true]);
        assert_eq!(outcome.visible_count, 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        let outcome = filter_cards(&sample_cards(), "xyz", &ActiveTag::All);

        assert_eq!(outcome.visible, vec![false, false]);
        assert_eq!(outcome.visible_count, 0);
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let outcome = filter_cards(&sample_cards(), "  RUST ", &ActiveTag::All);

        assert_eq!(outcome.visible, vec![false, true]);
    }

    #[test]
    fn test_query_matches_description() {
        let cards = vec![card("Intro", "A tour of Ownership rules", "rust")];

        assert_eq!(filter_cards(&cards, "ownership", &ActiveTag::All).visible_count, 1);
        assert_eq!(filter_cards(&cards, "borrow", &ActiveTag::All).visible_count, 0);
    }

    #[test]
    fn test_query_and_tag_must_both_hold() {
        let outcome = filter_cards(
            &sample_cards(),
            "go",
            &ActiveTag::Tag("memory".to_string()),
        );

        assert_eq!(outcome.visible_count, 0);
    }

    #[test]
    fn test_tag_match_is_exact() {
        let cards = vec![card("Go", "", "golang")];

        assert!(!matches_tag(&cards[0], &ActiveTag::Tag("go".to_string())));
        assert!(matches_tag(&cards[0], &ActiveTag::All));
    }

    #[test]
    fn test_empty_card_list() {
        let outcome = filter_cards(&[], "", &ActiveTag::All);

        assert!(outcome.visible.is_empty());
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let cards = sample_cards();
        let tag = ActiveTag::Tag("go".to_string());

        let first = filter_cards(&cards, "con", &tag);
        let second = filter_cards(&cards, "con", &tag);

        assert_eq!(first, second);
    }

    #[test]
    fn test_count_matches_visible_flags() {
        let cards = vec![
            card("Alpha", "", "a"),
            card("Beta", "alpha release", "b"),
            card("Gamma", "", "a,b"),
        ];

        for query in ["", "alpha", "a", "zzz"] {
            for tag in [ActiveTag::All, ActiveTag::Tag("a".to_string()), ActiveTag::Tag("b".to_string())] {
                let outcome = filter_cards(&cards, query, &tag);
                let expected = outcome.visible.iter().filter(|v| **v).count();
                assert_eq!(outcome.visible_count, expected);
            }
        }
    }
}
