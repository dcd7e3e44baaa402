use std::collections::HashSet;

use proptest::prelude::*;
use retort_retrieval::ranking::jaccard;

fn word_set() -> impl Strategy<Value = HashSet<String>> {
    proptest::collection::hash_set("[a-z]{1,8}", 0..12)
}

proptest! {
    #[test]
    fn jaccard_is_symmetric(a in word_set(), b in word_set()) {
        prop_assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn jaccard_is_bounded(a in word_set(), b in word_set()) {
        let similarity = jaccard(&a, &b);
        prop_assert!((0.0..=1.0).contains(&similarity));
    }

    #[test]
    fn jaccard_of_self_is_one_or_zero(a in word_set()) {
        let similarity = jaccard(&a, &a);
        if a.is_empty() {
            prop_assert_eq!(similarity, 0.0);
        } else {
            prop_assert_eq!(similarity, 1.0);
        }
    }

    #[test]
    fn disjoint_sets_score_zero(a in word_set()) {
        let shifted: HashSet<String> = a.iter().map(|w| format!("{w}9")).collect();
        prop_assert_eq!(jaccard(&a, &shifted), 0.0);
    }
}
