//! Property-based tests for MIME classification.
//!
//! `classify` must accept any string, never partially match a malformed one,
//! and ignore ASCII case.

use download_history::services::mime_classifier::classify;
use download_history::types::file_category::FileCategory;
use proptest::prelude::*;

fn arb_top_level() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("video"),
        Just("audio"),
        Just("image"),
        Just("text"),
        Just("application"),
        Just("font"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn classify_is_total(input in any::<String>()) {
        let category = classify(Some(input.as_str()));
        prop_assert!(FileCategory::ALL.contains(&category));
    }

    #[test]
    fn strings_without_separator_are_other(input in "[^/]*") {
        prop_assert_eq!(classify(Some(input.as_str())), FileCategory::Other);
    }

    #[test]
    fn extra_separators_are_other(
        top in arb_top_level(),
        sub in "[a-z0-9.+-]{1,12}",
        tail in "[a-z0-9/]{0,8}",
    ) {
        let mime = format!("{}/{}/{}", top, sub, tail);
        prop_assert_eq!(classify(Some(mime.as_str())), FileCategory::Other);
    }

    #[test]
    fn ascii_case_does_not_matter(top in arb_top_level(), sub in "[a-zA-Z0-9.+-]{1,12}") {
        let mime = format!("{}/{}", top, sub);
        prop_assert_eq!(
            classify(Some(mime.to_ascii_uppercase().as_str())),
            classify(Some(mime.to_ascii_lowercase().as_str()))
        );
    }

    #[test]
    fn page_is_never_produced(input in any::<String>()) {
        prop_assert_ne!(classify(Some(input.as_str())), FileCategory::Page);
    }
}
