use proptest::prelude::*;

use menudb_core::config::SearchSettings;
use menudb_core::traits::{CatalogSearch, WordSuggester};
use menudb_core::{Catalog, Category, CategoryFilter, MenuItem};
use menudb_text::{LexicalIndex, SuggestionIndex};

const WORDS: &[&str] = &[
    "kopi", "susu", "gula", "aren", "espresso", "latte", "teh", "matcha", "coklat", "dingin", "panas", "manis",
];

fn phrase(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..=max_words).prop_map(|w| w.join(" "))
}

fn any_catalog() -> impl Strategy<Value = Catalog> {
    let category = prop_oneof![Just(Category::Hot), Just(Category::Cold)];
    prop::collection::vec((phrase(2), category, phrase(6)), 1..10).prop_map(|rows| {
        Catalog::new(rows.into_iter().map(|(name, category, description)| MenuItem::new(name, category, description)).collect())
    })
}

proptest! {
    #[test]
    fn ranked_words_are_positive_and_sorted(catalog in any_catalog(), query in "[a-z]{1,10}") {
        let index = SuggestionIndex::from_catalog(&catalog, &SearchSettings::default());
        let ranked = index.ranked(&query);
        prop_assert!(ranked.iter().all(|&(_, score)| score > 0.0));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn suggest_is_a_prefix_of_ranked(catalog in any_catalog(), query in "[a-z]{1,10}", top_n in 0usize..6) {
        let index = SuggestionIndex::from_catalog(&catalog, &SearchSettings::default());
        let suggestions = index.suggest(&query, top_n);
        prop_assert!(suggestions.len() <= top_n);
        let expected: Vec<String> = index.ranked(&query).into_iter().take(top_n).map(|(w, _)| w.to_string()).collect();
        prop_assert_eq!(suggestions, expected);
    }

    #[test]
    fn lexical_hits_are_positive_sorted_and_in_range(catalog in any_catalog(), query in phrase(3)) {
        let index = LexicalIndex::build(&catalog, &SearchSettings::default());
        let hits = index.search(&query, CategoryFilter::All);
        prop_assert!(hits.iter().all(|h| h.score > 0.0 && h.id < catalog.len()));
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
