//! Decides which gallery items match the active filters.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::filter::FilterState;

/// Something that declares a whitespace-separated tag list per category.
pub trait Tagged {
    /// The raw tag list for `category`, or `None` if the item has no
    /// attribute for it.
    fn tags(&self, category: &str) -> Option<Cow<'_, str>>;
}

impl Tagged for HashMap<String, String> {
    fn tags(&self, category: &str) -> Option<Cow<'_, str>> {
        self.get(category).map(|s| Cow::Borrowed(s.as_str()))
    }
}

impl Tagged for BTreeMap<String, String> {
    fn tags(&self, category: &str) -> Option<Cow<'_, str>> {
        self.get(category).map(|s| Cow::Borrowed(s.as_str()))
    }
}

impl<T: Tagged + ?Sized> Tagged for &T {
    fn tags(&self, category: &str) -> Option<Cow<'_, str>> {
        (**self).tags(category)
    }
}

/// True iff every active category's value appears in the item's tag list
/// for that category. An empty state matches everything.
pub fn is_visible<T: Tagged + ?Sized>(item: &T, state: &FilterState) -> bool {
    state.iter().all(|(category, wanted)| {
        item.tags(category)
            .is_some_and(|tags| tags.split_whitespace().any(|tag| tag == wanted))
    })
}

/// Evaluate [`is_visible`] for every item, in order.
pub fn visible_mask<T: Tagged>(items: &[T], state: &FilterState) -> Vec<bool> {
    items.iter().map(|item| is_visible(item, state)).collect()
}
