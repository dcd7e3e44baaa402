//! The plain-text block format the corpus persists in.
//!
//! Entries are separated by a line containing exactly `---`. Each block
//! carries labeled fields:
//!
//! ```text
//! QUESTION: How do I reset my password?
//! ANSWER: Open settings and choose "reset password".
//! TAGS: password, account
//! ```
//!
//! Field extraction is non-greedy and order-aware: QUESTION ends where
//! ANSWER begins, ANSWER ends where TAGS begins or the block ends. TAGS
//! is optional. Blocks missing QUESTION or ANSWER are skipped, not
//! errors.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use retort_core::constants::BLOCK_SEPARATOR;
use retort_core::models::Entry;

fn question_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)QUESTION:(.*?)(?:ANSWER:|TAGS:|\z)").expect("static pattern"))
}

fn answer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)ANSWER:(.*?)(?:TAGS:|\z)").expect("static pattern"))
}

fn tags_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)TAGS:(.*)\z").expect("static pattern"))
}

/// Parse a serialized corpus into entries. Malformed blocks are skipped.
pub fn parse(content: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut block = String::new();

    for line in content.lines() {
        if line.trim() == BLOCK_SEPARATOR {
            if let Some(entry) = parse_block(&block) {
                entries.push(entry);
            }
            block.clear();
        } else {
            block.push_str(line);
            block.push('\n');
        }
    }
    if let Some(entry) = parse_block(&block) {
        entries.push(entry);
    }

    entries
}

fn parse_block(block: &str) -> Option<Entry> {
    if block.trim().is_empty() {
        return None;
    }

    let question = field(question_re(), block);
    let answer = field(answer_re(), block);

    let (Some(question), Some(answer)) = (question, answer) else {
        debug!("skipping block without QUESTION and ANSWER");
        return None;
    };

    let tags: Vec<String> = tags_re()
        .captures(block)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().split(',').map(|t| t.to_string()).collect())
        .unwrap_or_default();

    Some(Entry::new(&question, &answer, &tags))
}

/// Extract a labeled field; `None` when absent or empty after trimming.
fn field(re: &Regex, block: &str) -> Option<String> {
    let text = re.captures(block)?.get(1)?.as_str().trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Render the block appended to the backing store for a new entry.
pub fn append_block(entry: &Entry) -> String {
    format!(
        "\n{}\nQUESTION: {}\nANSWER: {}\nTAGS: {}\n",
        BLOCK_SEPARATOR,
        entry.question,
        entry.answer,
        entry.tags.join(", ")
    )
}

/// Render a whole corpus, blocks joined by separator lines.
pub fn render(entries: &[Entry]) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .map(|e| {
            format!(
                "QUESTION: {}\nANSWER: {}\nTAGS: {}\n",
                e.question,
                e.answer,
                e.tags.join(", ")
            )
        })
        .collect();
    blocks.join(&format!("{}\n", BLOCK_SEPARATOR))
}
