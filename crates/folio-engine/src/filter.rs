/// Synthetic category that matches every record.
pub const ALL_CATEGORY: &str = "All";

/// User-controlled criteria narrowing the visible record set.
///
/// `selected_category: None` is the "All" state. Both rules must pass for a
/// record to be visible (logical AND of the active filters).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub selected_category: Option<String>,
}

impl FilterState {
    /// Effective category label, with `None` rendered as "All".
    pub fn category_label(&self) -> &str {
        self.selected_category.as_deref().unwrap_or(ALL_CATEGORY)
    }

    pub fn matches(&self, title: &str, category: Option<&str>) -> bool {
        self.matches_text(title) && self.matches_category(category)
    }

    /// Case-insensitive substring test against the title. An empty query
    /// matches everything; a record without a title never matches a
    /// non-empty query (malformed records filter out rather than erroring).
    fn matches_text(&self, title: &str) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        if title.is_empty() {
            return false;
        }
        title
            .to_lowercase()
            .contains(&self.search_query.to_lowercase())
    }

    fn matches_category(&self, category: Option<&str>) -> bool {
        match (self.selected_category.as_deref(), category) {
            (None, _) => true,
            (Some(selected), Some(category)) => selected == category,
            (Some(_), None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(query: &str) -> FilterState {
        FilterState {
            search_query: query.to_string(),
            selected_category: None,
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(search("").matches("Anything", None));
        assert!(search("").matches("", None));
    }

    #[test]
    fn text_match_is_case_insensitive() {
        assert!(search("REACT").matches("My React App", None));
        assert!(search("react").matches("REACT ROUNDUP", None));
        assert!(!search("vue").matches("My React App", None));
    }

    #[test]
    fn untitled_records_never_match_a_query() {
        assert!(!search("react").matches("", None));
    }

    #[test]
    fn category_equality_is_exact() {
        let filter = FilterState {
            search_query: String::new(),
            selected_category: Some("Web".to_string()),
        };
        assert!(filter.matches("Site", Some("Web")));
        assert!(!filter.matches("Site", Some("web")));
        assert!(!filter.matches("Site", Some("Mobile")));
        assert!(!filter.matches("Site", None));
    }

    #[test]
    fn rules_combine_with_and() {
        let filter = FilterState {
            search_query: "shop".to_string(),
            selected_category: Some("Web".to_string()),
        };
        assert!(filter.matches("Shop Frontend", Some("Web")));
        assert!(!filter.matches("Shop Frontend", Some("Mobile")));
        assert!(!filter.matches("Dashboard", Some("Web")));
    }
}
