//! Property-based tests for reusable row binding.
//!
//! A row that has been bound to any sequence of records must look exactly
//! like a freshly built row bound only to the last one.

use download_history::managers::download_history_adapter::DownloadHistoryAdapter;
use download_history::services::layout_inflater::BuiltinLayouts;
use download_history::types::download::DownloadRecord;
use download_history::types::file_category::FileCategory;
use download_history::types::settings::HistorySettings;
use proptest::prelude::*;

fn arb_mime() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "(video|audio|image|text|application|VIDEO|Text)/[a-z0-9.+-]{1,10}".prop_map(Some),
        "[a-z/]{0,12}".prop_map(Some),
    ]
}

fn arb_record() -> impl Strategy<Value = DownloadRecord> {
    (
        "[a-zA-Z0-9 ._-]{0,24}",
        prop_oneof![
            "https://[a-z]{1,10}\\.(com|org|test)(:[0-9]{2,4})?/[a-z0-9]{0,8}",
            "[a-z :/]{0,16}",
        ],
        arb_mime(),
        any::<i64>(),
        0i64..4_000_000_000_000,
    )
        .prop_map(|(filename, url, mime_type, content_length, timestamp)| DownloadRecord {
            id: format!("{}-{}", filename, timestamp),
            filename,
            url,
            mime_type,
            content_length,
            timestamp,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rebound_row_matches_fresh_row(records in proptest::collection::vec(arb_record(), 1..8)) {
        let adapter = DownloadHistoryAdapter::with_default_formatters(&HistorySettings::default());
        let mut recycled = adapter.create_view_holder(&BuiltinLayouts).unwrap();
        for record in &records {
            adapter.bind_view_holder_for_download(&mut recycled, record);
        }

        let last = records.last().unwrap();
        let mut fresh = adapter.create_view_holder(&BuiltinLayouts).unwrap();
        adapter.bind_view_holder_for_download(&mut fresh, last);

        prop_assert_eq!(&recycled, &fresh);
        prop_assert_eq!(recycled.filename(), last.filename.as_str());
    }

    #[test]
    fn binding_is_idempotent(record in arb_record()) {
        let adapter = DownloadHistoryAdapter::with_default_formatters(&HistorySettings::default());
        let mut row = adapter.create_view_holder(&BuiltinLayouts).unwrap();

        adapter.bind_view_holder_for_download(&mut row, &record);
        let once = row.clone();
        adapter.bind_view_holder_for_download(&mut row, &record);

        prop_assert_eq!(row, once);
    }

    #[test]
    fn icon_follows_classification(record in arb_record()) {
        let adapter = DownloadHistoryAdapter::with_default_formatters(&HistorySettings::default());
        let mut row = adapter.create_view_holder(&BuiltinLayouts).unwrap();
        adapter.bind_view_holder_for_download(&mut row, &record);

        let category = download_history::services::mime_classifier::classify(record.mime_type.as_deref());
        prop_assert_eq!(row.icon(), Some(category.icon()));
        prop_assert_ne!(category, FileCategory::Page);
    }
}
