use crate::domain::card::Card;

/// Keyword filter parsed from the search box
///
/// An empty or whitespace-only query matches every card. Otherwise the query
/// is lower-cased and split on whitespace; a card matches when its lower-cased
/// text contains every keyword as a substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    keywords: Vec<String>,
}

impl Filter {
    pub fn parse(raw: Option<&str>) -> Self {
        let keywords: Vec<String> = raw
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(|q| q.to_lowercase().split_whitespace().map(String::from).collect())
            .unwrap_or_default();

        Self { keywords }
    }

    /// True when the query had at least one keyword
    pub fn is_active(&self) -> bool {
        !self.keywords.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Checks a card's text against every keyword
    pub fn matches_text(&self, text: Option<&str>) -> bool {
        if self.keywords.is_empty() {
            return true;
        }
        match text {
            Some(text) => {
                let haystack = text.to_lowercase();
                self.keywords.iter().all(|k| haystack.contains(k.as_str()))
            }
            None => false,
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        self.matches_text(card.text.as_deref())
    }

    /// Returns the cards that pass, in their original order
    pub fn apply<'a>(&self, cards: &'a [Card]) -> Vec<&'a Card> {
        cards.iter().filter(|card| self.matches(card)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<Card> {
        vec![
            Card::new("1", "Buy milk and Bread"),
            Card::new("2", "bread recipe https://example.com/Bread"),
            Card::untitled("3"),
            Card::new("4", "call mom"),
        ]
    }

    fn ids(found: Vec<&Card>) -> Vec<&str> {
        found.into_iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_passes_everything() {
        let cards = cards();
        for raw in [None, Some(""), Some("  \t ")] {
            let filter = Filter::parse(raw);
            assert!(!filter.is_active());
            assert_eq!(filter.apply(&cards).len(), 4);
        }
    }

    #[test]
    fn test_keywords_are_lowercased_and_split() {
        let filter = Filter::parse(Some("  BREAD   Milk "));
        assert_eq!(filter.keywords(), &["bread".to_string(), "milk".to_string()]);
    }

    #[test]
    fn test_all_keywords_must_match() {
        let cards = cards();
        assert_eq!(ids(Filter::parse(Some("bread")).apply(&cards)), vec!["1", "2"]);
        assert_eq!(ids(Filter::parse(Some("milk bread")).apply(&cards)), vec!["1"]);
        assert!(Filter::parse(Some("milk recipe")).apply(&cards).is_empty());
    }

    #[test]
    fn test_substring_not_token_match() {
        let cards = cards();
        assert_eq!(ids(Filter::parse(Some("rea")).apply(&cards)), vec!["1", "2"]);
        assert_eq!(ids(Filter::parse(Some("ex")).apply(&cards)), vec!["2"]);
    }

    #[test]
    fn test_card_without_text_never_matches_keywords() {
        let filter = Filter::parse(Some("a"));
        assert!(!filter.matches(&Card::untitled("x")));
        assert!(Filter::default().matches(&Card::untitled("x")));
    }
}
