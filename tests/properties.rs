use kanban_core::domain::{linkify, slot_gates, Card, CardId, Filter, Segment};
use kanban_core::DropSlot;
use proptest::prelude::*;
use regex::Regex;

fn text_piece() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 .,:/]{0,12}",
        "[ \t\n]{1,3}",
        "https?://[a-z0-9./?=&-]{1,16}",
        Just("http://".to_string()),
    ]
}

fn card_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(text_piece(), 0..8).prop_map(|pieces| pieces.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn linkify_segments_rebuild_text(text in card_text()) {
        let url = Regex::new(r"https?://\S+").unwrap();
        let whole_url = Regex::new(r"^https?://\S+$").unwrap();
        let segments = linkify(&text);

        let rebuilt: String = segments.iter().map(Segment::as_str).collect();
        prop_assert_eq!(&rebuilt, &text);
        prop_assert_eq!(segments.len() % 2, 1);

        for (i, segment) in segments.iter().enumerate() {
            if i % 2 == 0 {
                prop_assert!(!segment.is_link());
                prop_assert!(!url.is_match(segment.as_str()));
            } else {
                prop_assert!(segment.is_link());
                prop_assert!(whole_url.is_match(segment.as_str()));
            }
        }
    }

    #[test]
    fn filter_is_and_of_lowercase_substrings(
        query in "[a-zA-Z \t]{0,12}",
        text in proptest::option::of("[a-zA-Z ]{0,24}"),
    ) {
        let filter = Filter::parse(Some(query.as_str()));
        let keywords: Vec<String> = query
            .trim()
            .to_lowercase()
            .split_whitespace()
            .map(String::from)
            .collect();

        let expected = if keywords.is_empty() {
            true
        } else {
            text.as_ref().is_some_and(|t| {
                let lower = t.to_lowercase();
                keywords.iter().all(|k| lower.contains(k.as_str()))
            })
        };
        prop_assert_eq!(filter.matches_text(text.as_deref()), expected);
    }

    #[test]
    fn only_neighbouring_slots_are_disabled(len in 0usize..8, pick in any::<prop::sample::Index>()) {
        let cards: Vec<Card> = (0..len).map(|i| Card::new(format!("c{i}").as_str(), "x")).collect();
        let refs: Vec<&Card> = cards.iter().collect();

        let idle = slot_gates(&refs, None);
        prop_assert_eq!(idle.len(), len + 1);
        prop_assert!(idle.iter().all(|g| !g.disabled));

        if len > 0 {
            let dragged = pick.index(len);
            let id = CardId::new(format!("c{dragged}"));
            let gates = slot_gates(&refs, Some(&id));
            for (slot, gate) in gates.iter().enumerate() {
                let expected = slot == dragged || slot == dragged + 1;
                prop_assert_eq!(gate.disabled, expected, "slot {}", slot);
            }
            prop_assert_eq!(&gates[len].slot, &DropSlot::Trailing);
        }
    }
}
