//! Bulk additions of `left = right` lines.
//!
//! Each line is split at its first `=`. Both sides are trimmed and have their
//! whitespace collapsed. A left side containing a space becomes a phrase,
//! anything else becomes a word. Keys are case-folded, values keep their
//! casing. Existing keys are overwritten, nothing is ever removed.

use crate::dictionary::{Dictionary, normalize_key};
use tracing::{debug, info};

/// Outcome of a bulk merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Lines stored as words (new or overwritten)
    pub words: usize,
    /// Lines stored as phrases (new or overwritten)
    pub phrases: usize,
    /// Non-blank lines that were ignored
    pub skipped: usize,
}

impl MergeSummary {
    /// Number of entries added or overwritten
    pub fn added(&self) -> usize {
        self.words + self.phrases
    }
}

/// A single parsed addition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Addition {
    Word { key: String, translation: String },
    Phrase { key: String, translation: String },
}

/// Parses one `left = right` line. Returns `None` for lines without `=` or
/// with an empty side.
pub fn parse_line(line: &str) -> Option<Addition> {
    let (left, right) = line.split_once('=')?;
    let left = collapse(left);
    let right = collapse(right);
    if left.is_empty() || right.is_empty() {
        return None;
    }

    let key = normalize_key(&left);
    if left.contains(' ') {
        Some(Addition::Phrase {
            key,
            translation: right,
        })
    } else {
        Some(Addition::Word {
            key,
            translation: right,
        })
    }
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Dictionary {
    /// Merges `left = right` lines into this dictionary in place.
    pub fn merge_lines(&mut self, raw: &str) -> MergeSummary {
        let mut summary = MergeSummary::default();

        for line in raw.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(Addition::Word { key, translation }) => {
                    self.insert_word(&key, translation.as_str());
                    summary.words += 1;
                }
                Some(Addition::Phrase { key, translation }) => {
                    self.insert_phrase(&key, &translation);
                    summary.phrases += 1;
                }
                None => {
                    debug!("Skipping malformed dictionary line: {:?}", line);
                    summary.skipped += 1;
                }
            }
        }

        info!(
            "Merged {} words and {} phrases ({} lines skipped)",
            summary.words, summary.phrases, summary.skipped
        );
        summary
    }
}

/// Merges `left = right` lines into `dictionary` and hands back the updated
/// dictionary along with the merge summary.
pub fn merge_lines(raw: &str, mut dictionary: Dictionary) -> (Dictionary, MergeSummary) {
    let summary = dictionary.merge_lines(raw);
    (dictionary, summary)
}
