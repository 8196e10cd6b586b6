use ctxsum_core::{summarize, truncate_chars, Fragment, FRAGMENT_MAX_CHARS, SUMMARY_MAX_CHARS};
use ctxsum_test_utils::{
    char_len, fragment_list_strategy, naive_join, text_list_strategy, text_strategy,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_summary_is_bounded(chunks in fragment_list_strategy()) {
        let summary = summarize(Some(&chunks));
        prop_assert!(char_len(&summary) <= SUMMARY_MAX_CHARS);
    }

    #[test]
    fn prop_text_lists_never_fail(chunks in text_list_strategy()) {
        let summary = summarize(Some(&chunks));
        prop_assert!(char_len(&summary) <= SUMMARY_MAX_CHARS);
    }

    #[test]
    fn prop_summary_is_deterministic(chunks in fragment_list_strategy()) {
        let cloned = chunks.clone();
        prop_assert_eq!(summarize(Some(chunks)), summarize(Some(cloned)));
    }

    #[test]
    fn prop_single_fragment_truncation(text in text_strategy(FRAGMENT_MAX_CHARS * 2)) {
        let summary = summarize(Some([text.as_str()]));
        prop_assert_eq!(char_len(&summary), char_len(&text).min(FRAGMENT_MAX_CHARS));
        prop_assert!(text.starts_with(&summary));
    }

    #[test]
    fn prop_join_law_when_under_cap(chunks in fragment_list_strategy()) {
        let texts: Vec<String> = chunks
            .iter()
            .filter_map(Fragment::as_text)
            .map(|text| truncate_chars(&text, FRAGMENT_MAX_CHARS).to_owned())
            .collect();
        let borrowed: Vec<&str> = texts.iter().map(String::as_str).collect();
        let joined = naive_join(&borrowed);

        let summary = summarize(Some(&chunks));
        if char_len(&joined) <= SUMMARY_MAX_CHARS {
            prop_assert_eq!(summary, joined);
        } else {
            prop_assert_eq!(summary.as_str(), truncate_chars(&joined, SUMMARY_MAX_CHARS));
        }
    }

    #[test]
    fn prop_absent_fragments_are_invisible(chunks in fragment_list_strategy()) {
        let mut padded = vec![Fragment::Absent];
        for chunk in &chunks {
            padded.push(chunk.clone());
            padded.push(Fragment::Absent);
        }
        prop_assert_eq!(summarize(Some(&padded)), summarize(Some(&chunks)));
    }

    #[test]
    fn prop_order_is_preserved(a in "[a-z]{1,16}", b in "[A-Z]{1,16}") {
        prop_assert_eq!(summarize(Some([&a, &b])), format!("{a}\n{b}"));
        prop_assert_eq!(summarize(Some([&b, &a])), format!("{b}\n{a}"));
    }
}

#[test]
fn empty_input_law() {
    assert_eq!(summarize(None::<Vec<Fragment>>), "");
    assert_eq!(summarize(Some(Vec::<Fragment>::new())), "");
    assert_eq!(summarize(Some([Fragment::Absent, Fragment::Absent])), "");
}

#[test]
fn hello_world_scenario() {
    assert_eq!(summarize(Some(["hello", "world"])), "hello\nworld");
}

#[test]
fn oversized_fragment_scenario() {
    let summary = summarize(Some(["a".repeat(6_000)]));
    assert_eq!(summary, "a".repeat(5_000));
}

#[test]
fn nulls_around_text_scenario() {
    assert_eq!(summarize(Some([None, Some("x"), None])), "x");
}

#[test]
fn summarizer_is_shareable_across_threads() {
    let input: Vec<String> = (0..8).map(|i| format!("chunk-{i}")).collect();
    let expected = summarize(Some(&input));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| summarize(Some(&input))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
