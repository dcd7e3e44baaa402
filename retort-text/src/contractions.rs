//! Fixed contraction table.

/// Ordered substring replacements. The specific `can't` comes before the
/// generic `n't` so a single token is never expanded twice.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("can't", "cannot"),
    ("n't", " not"),
    ("'ve", " have"),
    ("'re", " are"),
    ("'m", " am"),
    ("'ll", " will"),
    ("'d", " would"),
    ("'s", " is"),
];

/// Expand contractions in already-lowercased text.
pub(crate) fn expand(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in CONTRACTIONS {
        out = out.replace(pattern, replacement);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_before_generic() {
        assert_eq!(expand("can't"), "cannot");
        assert_eq!(expand("don't"), "do not");
        assert_eq!(expand("won't"), "wo not");
    }

    #[test]
    fn suffix_forms() {
        assert_eq!(expand("i'm here, you're not"), "i am here, you are not");
        assert_eq!(expand("it's"), "it is");
        assert_eq!(expand("they'll"), "they will");
        assert_eq!(expand("i'd"), "i would");
        assert_eq!(expand("we've"), "we have");
    }
}
