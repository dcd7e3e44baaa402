use proptest::prelude::*;
use retort_text::{is_stopword, keywords, normalize};

proptest! {
    #[test]
    fn normalize_never_panics(s in ".*") {
        let _ = normalize(&s);
    }

    #[test]
    fn normalize_is_idempotent(s in "[a-zA-Z .,!']{0,80}") {
        let once = normalize(&s);
        let again = normalize(&once.join(" "));
        prop_assert_eq!(again, once);
    }

    #[test]
    fn output_contains_no_bare_stopwords(s in "[a-z ]{0,80}") {
        for token in normalize(&s) {
            prop_assert!(
                token.contains("_not") || !is_stopword(&token),
                "bare stopword '{}' survived",
                token
            );
        }
    }

    #[test]
    fn output_is_lowercase(s in "[a-zA-Z ]{0,80}") {
        for token in normalize(&s) {
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }

    #[test]
    fn keywords_never_panics_and_filters_length(s in ".*") {
        for keyword in keywords(&s) {
            prop_assert!(keyword.len() > 2);
        }
    }
}

#[test]
fn question_normalization_is_idempotent() {
    let once = normalize("how does caching work?");
    assert_eq!(once, vec!["caching", "work", "question_mark"]);
    assert_eq!(normalize(&once.join(" ")), once);
}
