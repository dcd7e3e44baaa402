/// Retort system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A token must be longer than this to count as an index keyword.
pub const MIN_KEYWORD_LEN: usize = 2;

/// Literal separator line between serialized corpus blocks.
pub const BLOCK_SEPARATOR: &str = "---";

/// Synthetic token appended when the raw text contains a question mark.
pub const QUESTION_MARK_TOKEN: &str = "question_mark";

/// Suffix of negation-fused tokens; such tokens survive stopword filtering.
pub const NEGATION_SUFFIX: &str = "_not";
