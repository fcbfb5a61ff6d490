//! Single-selection-per-category filter state.

use std::collections::BTreeMap;

/// Active filters: at most one value per category.
///
/// A category is present in the map iff it currently constrains the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: BTreeMap<String, String>,
}

/// What a call to [`FilterState::toggle`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// The value is now selected; `replaced` holds the value it displaced, if any.
    Activated { replaced: Option<String> },
    /// The value was already selected and has been removed.
    Deactivated,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `value` in `category`, or clear the category if `value` was
    /// already the selection.
    pub fn toggle(&mut self, category: &str, value: &str) -> Toggle {
        if self.active.get(category).map(String::as_str) == Some(value) {
            self.active.remove(category);
            return Toggle::Deactivated;
        }
        let replaced = self.active.insert(category.to_owned(), value.to_owned());
        Toggle::Activated { replaced }
    }

    /// The selected value for `category`, if the category is active.
    pub fn get(&self, category: &str) -> Option<&str> {
        self.active.get(category).map(String::as_str)
    }

    pub fn is_selected(&self, category: &str, value: &str) -> bool {
        self.get(category) == Some(value)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Read-only view of the active `(category, value)` pairs.
    pub fn active(&self) -> &BTreeMap<String, String> {
        &self.active
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.active.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }
}

/// The `category:value` pair a filter chip toggles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterSelector {
    pub category: String,
    pub value: String,
}

impl FilterSelector {
    /// Parse a chip attribute of the form `category:value`.
    ///
    /// Only the first two colon-separated segments are used. Returns `None`
    /// when either is missing or empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(':');
        let category = parts.next().filter(|s| !s.is_empty())?;
        let value = parts.next().filter(|s| !s.is_empty())?;
        Some(Self {
            category: category.to_owned(),
            value: value.to_owned(),
        })
    }

    pub fn is_selected_in(&self, state: &FilterState) -> bool {
        state.is_selected(&self.category, &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_previous_state() {
        let mut state = FilterState::new();
        state.toggle("aesthetic", "black");
        let before = state.clone();

        assert_eq!(
            state.toggle("style", "existential"),
            Toggle::Activated { replaced: None }
        );
        assert_eq!(state.toggle("style", "existential"), Toggle::Deactivated);
        assert_eq!(state, before);
        assert_eq!(state.get("style"), None);
    }

    #[test]
    fn new_value_replaces_previous_in_same_category() {
        let mut state = FilterState::new();
        state.toggle("style", "existential");
        let outcome = state.toggle("style", "modern");

        assert_eq!(
            outcome,
            Toggle::Activated {
                replaced: Some("existential".to_owned())
            }
        );
        assert_eq!(state.get("style"), Some("modern"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn categories_are_independent() {
        let mut state = FilterState::new();
        state.toggle("style", "modern");
        state.toggle("aesthetic", "black");
        state.toggle("style", "modern");

        assert_eq!(state.iter().collect::<Vec<_>>(), vec![("aesthetic", "black")]);
    }

    #[test]
    fn deactivation_removes_key_entirely() {
        let mut state = FilterState::new();
        state.toggle("style", "modern");
        state.toggle("style", "modern");
        assert!(state.is_empty());
        assert!(!state.active().contains_key("style"));
    }

    #[test]
    fn parse_selector() {
        assert_eq!(
            FilterSelector::parse("style:existential"),
            Some(FilterSelector {
                category: "style".into(),
                value: "existential".into(),
            })
        );
        assert_eq!(
            FilterSelector::parse("style:modern:extra").map(|s| s.value),
            Some("modern".to_owned())
        );
    }

    #[test]
    fn malformed_selectors_are_rejected() {
        for raw in ["", "style", "style:", ":modern", ":"] {
            assert_eq!(FilterSelector::parse(raw), None, "{raw:?}");
        }
    }
}
