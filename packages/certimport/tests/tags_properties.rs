//! Property tests for tag list parsing

use std::collections::HashMap;

use certimport::parse_tags;
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.:/-]{1,12}"
}

proptest! {
    #[test]
    fn never_panics_on_arbitrary_input(input in any::<String>()) {
        let _ = parse_tags(&input);
    }

    #[test]
    fn parsed_tags_are_trimmed_and_non_empty(input in "[ a-z=,]{0,40}") {
        for (key, value) in parse_tags(&input) {
            prop_assert!(!key.is_empty());
            prop_assert!(!value.is_empty());
            prop_assert_eq!(key.trim(), key.as_str());
            prop_assert_eq!(value.trim(), value.as_str());
            prop_assert!(!key.contains(','));
            prop_assert!(!key.contains('='));
        }
    }

    #[test]
    fn well_formed_pairs_round_trip_with_last_value_winning(
        pairs in prop::collection::vec((token(), token()), 0..8),
        padding in " {0,3}",
    ) {
        let input = pairs
            .iter()
            .map(|(k, v)| format!("{padding}{k}{padding}={padding}{v}{padding}"))
            .collect::<Vec<_>>()
            .join(",");

        let mut expected = HashMap::new();
        for (key, value) in &pairs {
            expected.insert(key.clone(), value.clone());
        }

        prop_assert_eq!(parse_tags(&input), expected);
    }

    #[test]
    fn malformed_pairs_do_not_disturb_valid_ones(
        key in token(),
        value in token(),
        junk in "[a-z ]{0,6}",
    ) {
        let input = format!("{junk},={value}, {key}= ,{key}={value},{junk}");
        let tags = parse_tags(&input);
        prop_assert_eq!(tags.len(), 1);
        prop_assert_eq!(tags.get(&key), Some(&value));
    }
}
