//! Filter router: view selection over the todo sequence.
//!
//! Filters partition the displayed list without ever mutating it. The
//! selection is session state only and is never persisted; a fresh session
//! always starts at [`Filter::All`].

use crate::model::todo::TodoItem;

/// View predicate over the todo sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every item.
    #[default]
    All,
    /// Items not yet completed.
    Active,
    /// Completed items only.
    Completed,
}

impl Filter {
    /// Returns whether an item belongs to this view.
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    /// Lazily selects matching items, preserving sequence order.
    pub fn apply<'a>(self, items: &'a [TodoItem]) -> impl Iterator<Item = &'a TodoItem> {
        items.iter().filter(move |item| self.matches(item))
    }

    /// Parses a navigation fragment into a view selection.
    pub fn from_route(route: &str) -> Option<Self> {
        match route {
            "#/" => Some(Self::All),
            "#/active" => Some(Self::Active),
            "#/completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Navigation fragment for this view.
    pub fn route(self) -> &'static str {
        match self {
            Self::All => "#/",
            Self::Active => "#/active",
            Self::Completed => "#/completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Filter;
    use crate::model::todo::TodoItem;

    #[test]
    fn matches_partitions_by_completion() {
        let mut item = TodoItem::new("write report");
        assert!(Filter::All.matches(&item));
        assert!(Filter::Active.matches(&item));
        assert!(!Filter::Completed.matches(&item));

        item.completed = true;
        assert!(Filter::All.matches(&item));
        assert!(!Filter::Active.matches(&item));
        assert!(Filter::Completed.matches(&item));
    }

    #[test]
    fn routes_round_trip() {
        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            assert_eq!(Filter::from_route(filter.route()), Some(filter));
        }
        assert_eq!(Filter::from_route("#/archived"), None);
        assert_eq!(Filter::from_route(""), None);
    }

    #[test]
    fn default_view_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }
}
