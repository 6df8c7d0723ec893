/// Page configuration: element ids, class names, feedback texts and delays.
///
/// Defaults match the site's templates. A page may override any subset of
/// fields with an inline JSON block:
///
/// ```html
/// <script type="application/json" id="site-ui-config">
///   { "share": { "copied_text": "Copied!" } }
/// </script>
/// ```
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Id of the optional inline configuration block
pub const CONFIG_ELEMENT_ID: &str = "site-ui-config";

/// Class used to hide elements throughout the site
pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub menu: MenuConfig,
    pub filter: FilterConfig,
    pub tabs: TabsConfig,
    pub share: ShareConfig,
    pub subscribe: SubscribeConfig,
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<PageConfig> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A toggle control and the panel it drives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCandidate {
    pub toggle_id: String,
    pub panel_id: String,
}

impl MenuCandidate {
    fn new(toggle_id: &str, panel_id: &str) -> Self {
        MenuCandidate {
            toggle_id: toggle_id.to_string(),
            panel_id: panel_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Tried in order; the first candidate whose toggle exists wins
    pub candidates: Vec<MenuCandidate>,
    pub open_icon_selector: String,
    pub close_icon_selector: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            candidates: vec![
                MenuCandidate::new("menu-toggle", "mobile-menu"),
                MenuCandidate::new("menu-toggle-articles", "mobile-menu-articles"),
            ],
            open_icon_selector: ".menu-open".to_string(),
            close_icon_selector: ".menu-close".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub search_input_id: String,
    pub grid_id: String,
    pub results_count_id: String,
    pub empty_state_id: String,
    pub card_selector: String,
    pub tag_filter_selector: String,
    pub active_class: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            search_input_id: "search-input".to_string(),
            grid_id: "articles-grid".to_string(),
            results_count_id: "results-count".to_string(),
            empty_state_id: "empty-state".to_string(),
            card_selector: ".article-card".to_string(),
            tag_filter_selector: ".tag-filter".to_string(),
            active_class: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    pub trigger_selector: String,
    pub panel_selector: String,
    /// Panel id = prefix + the trigger's `data-tab` value
    pub panel_id_prefix: String,
    pub selected_classes: Vec<String>,
    pub deselected_classes: Vec<String>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        TabsConfig {
            trigger_selector: ".tab-btn".to_string(),
            panel_selector: ".tab-content".to_string(),
            panel_id_prefix: "tab-".to_string(),
            selected_classes: vec!["text-white".to_string(), "border-emerald-400".to_string()],
            deselected_classes: vec!["text-white/50".to_string(), "border-transparent".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub trigger_selector: String,
    pub copied_text: String,
    pub copied_class: String,
    pub feedback_ms: u32,
}

impl Default for ShareConfig {
    fn default() -> Self {
        ShareConfig {
            trigger_selector: "[data-share]".to_string(),
            copied_text: "Скопировано!".to_string(),
            copied_class: "text-emerald-300".to_string(),
            feedback_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscribeConfig {
    pub form_id: String,
    pub button_selector: String,
    pub email_selector: String,
    pub email_field: String,
    pub csrf_field: String,
    pub pending_text: String,
    pub success_text: String,
    pub error_text: String,
    pub network_error_text: String,
    pub success_classes: Vec<String>,
    pub feedback_ms: u32,
}

impl Default for SubscribeConfig {
    fn default() -> Self {
        SubscribeConfig {
            form_id: "subscribe-form".to_string(),
            button_selector: "button[type=\"submit\"]".to_string(),
            email_selector: "input[name=\"email\"]".to_string(),
            email_field: "email".to_string(),
            csrf_field: "csrfmiddlewaretoken".to_string(),
            pending_text: "Отправка...".to_string(),
            success_text: "Готово ✓".to_string(),
            error_text: "Ошибка".to_string(),
            network_error_text: "Ошибка сети".to_string(),
            success_classes: vec!["border-emerald-400/50".to_string(), "text-emerald-200".to_string()],
            feedback_ms: 2500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PageConfig::default();

        assert_eq!(config.menu.candidates.len(), 2);
        assert_eq!(config.menu.candidates[0].toggle_id, "menu-toggle");
        assert_eq!(config.share.feedback_ms, 2000);
        assert_eq!(config.subscribe.feedback_ms, 2500);
        assert_eq!(config.tabs.panel_id_prefix, "tab-");
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = PageConfig::from_json("{}").unwrap();

        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_json(
            r#"{ "share": { "copied_text": "Copied!" }, "subscribe": { "feedback_ms": 1000 } }"#,
        )
        .unwrap();

        assert_eq!(config.share.copied_text, "Copied!");
        assert_eq!(config.share.feedback_ms, 2000);
        assert_eq!(config.subscribe.feedback_ms, 1000);
        assert_eq!(config.subscribe.success_text, "Готово ✓");
        assert_eq!(config.filter, FilterConfig::default());
    }

    #[test]
    fn test_menu_candidates_override() {
        let config = PageConfig::from_json(
            r#"{ "menu": { "candidates": [ { "toggle_id": "nav-btn", "panel_id": "nav" } ] } }"#,
        )
        .unwrap();

        assert_eq!(config.menu.candidates, vec![MenuCandidate::new("nav-btn", "nav")]);
        assert_eq!(config.menu.open_icon_selector, ".menu-open");
    }

    #[test]
    fn test_malformed_json() {
        assert!(PageConfig::from_json("{ \"menu\": 3 }").is_err());
        assert!(PageConfig::from_json("not json").is_err());
    }
}
