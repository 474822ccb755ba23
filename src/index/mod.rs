//! In-memory catalog of known Pokémon names.
//!
//! The index is populated exactly once, from the paginated name listing
//! fetched at startup, and is immutable for the rest of the session. It backs
//! the autocomplete suggestions: a case-insensitive **substring** lookup that
//! returns matches in the listing's original order.
//!
//! Substring (not prefix) matching is a deliberate contract: `"char"` matches
//! `"charizard"` and `"charmander"`, but also any name containing `"char"`
//! anywhere. Suggestion order is the stable index order, not a relevance
//! ranking.
//!
//! If the startup fetch fails the index simply stays empty — suggestions are
//! unavailable but the search screen keeps working. That degradation is
//! logged by the event handler, never shown to the user.

/// Ordered catalog of entity names with substring lookup.
///
/// Starts empty and is filled once via [`NameIndex::install`] when the
/// startup listing arrives. The source order is preserved so suggestions are
/// deterministic across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    names: Vec<String>,
}

impl NameIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the index contents with the fetched name listing.
    ///
    /// Called once per session when the startup fetch succeeds. The sequence
    /// order of `names` is kept as-is.
    pub fn install(&mut self, names: Vec<String>) {
        tracing::debug!(name_count = names.len(), "name index installed");
        self.names = names;
    }

    /// Whether the index has been populated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of names in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns up to `limit` names containing `query` as a substring.
    ///
    /// Matching is case-insensitive and position-independent. Results keep
    /// the index's sequence order. An empty `query` (or an empty index)
    /// yields no suggestions.
    ///
    /// # Example
    ///
    /// ```
    /// use dexterm::index::NameIndex;
    ///
    /// let mut index = NameIndex::new();
    /// index.install(vec!["charmander".into(), "charizard".into()]);
    /// assert_eq!(index.suggest("Char", 3), vec!["charmander", "charizard"]);
    /// assert!(index.suggest("", 3).is_empty());
    /// ```
    #[must_use]
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        if query.is_empty() {
            return vec![];
        }

        let needle = query.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn kanto_index() -> NameIndex {
        let mut index = NameIndex::new();
        index.install(vec![
            "bulbasaur".to_string(),
            "charmander".to_string(),
            "charizard".to_string(),
            "squirtle".to_string(),
        ]);
        index
    }

    #[test_case("char", &["charmander", "charizard"]; "substring matches in index order")]
    #[test_case("CHAR", &["charmander", "charizard"]; "matching is case insensitive")]
    #[test_case("saur", &["bulbasaur"]; "matches anywhere in the name, not just the prefix")]
    #[test_case("squirtle", &["squirtle"]; "exact name matches itself")]
    #[test_case("mewtwo", &[]; "no match yields nothing")]
    #[test_case("", &[]; "empty query yields nothing")]
    fn suggest_cases(query: &str, expected: &[&str]) {
        assert_eq!(kanto_index().suggest(query, 3), expected);
    }

    #[test]
    fn suggest_caps_at_limit_and_every_hit_contains_query() {
        let mut index = NameIndex::new();
        index.install(vec![
            "charmander".to_string(),
            "charmeleon".to_string(),
            "charizard".to_string(),
            "marchar".to_string(),
        ]);

        let hits = index.suggest("char", 3);
        assert_eq!(hits.len(), 3);
        for hit in &hits {
            assert!(hit.contains("char"));
        }

        // Substring semantics: a larger limit also admits the mid-word match.
        assert_eq!(
            index.suggest("char", 10),
            vec!["charmander", "charmeleon", "charizard", "marchar"]
        );
    }

    #[test]
    fn empty_index_suggests_nothing() {
        let index = NameIndex::new();
        assert!(index.is_empty());
        assert!(index.suggest("char", 3).is_empty());
    }

    #[test]
    fn install_preserves_source_order() {
        let index = kanto_index();
        assert_eq!(index.len(), 4);
        assert_eq!(index.suggest("a", 4)[0], "bulbasaur");
    }
}
