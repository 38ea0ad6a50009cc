//! The set of scope identifiers the user has toggled on.

/// An insertion-ordered set of scope identifiers.
///
/// The only mutation exposed besides [`SelectionSet::clear`] is
/// [`SelectionSet::toggle`], so toggling an identifier twice always restores
/// the previous contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    scopes: Vec<String>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present.
    ///
    /// Returns `true` if the identifier is selected afterwards. Blank
    /// identifiers are never selected.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if id.trim().is_empty() {
            return false;
        }
        if let Some(position) = self.scopes.iter().position(|s| *s == id) {
            self.scopes.remove(position);
            false
        } else {
            self.scopes.push(id);
            true
        }
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.scopes.clear();
    }

    /// Returns true if `id` is currently selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.scopes.iter().any(|s| s == id)
    }

    /// The selected identifiers in the order they were selected.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    /// The number of selected identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// The value of the `scope` parameter: identifiers joined by single spaces.
    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    /// Builds a selection by toggling each identifier in turn.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            selection.toggle(id);
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let selection = SelectionSet::new();
        assert!(selection.is_empty());
        assert_eq!(selection.scope_string(), "");
    }

    #[test]
    fn test_toggle_twice_restores_contents() {
        let mut selection = SelectionSet::from_iter(["email", "profile"]);
        let before = selection.clone();

        assert!(selection.toggle("openid"));
        assert!(!selection.toggle("openid"));
        assert_eq!(selection, before);

        assert!(!selection.toggle("email"));
        assert!(selection.toggle("email"));
        assert!(selection.contains("email"));
        assert_eq!(selection.len(), before.len());
    }

    #[test]
    fn test_insertion_order() {
        let mut selection = SelectionSet::new();
        selection.toggle("openid");
        selection.toggle("email");
        selection.toggle("profile");
        selection.toggle("email");
        assert_eq!(selection.iter().collect::<Vec<_>>(), ["openid", "profile"]);
        assert_eq!(selection.scope_string(), "openid profile");
    }

    #[test]
    fn test_blank_identifier_ignored() {
        let mut selection = SelectionSet::new();
        assert!(!selection.toggle("  "));
        assert!(!selection.toggle(""));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionSet::from_iter(["email"]);
        selection.clear();
        assert!(!selection.contains("email"));
    }
}
