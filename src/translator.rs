//! Dictionary-driven translation
//!
//! Text is translated one word token at a time: separators are copied through,
//! words are looked up, re-cased after the source token and, for `'s`
//! possessives, given the target-language possessive suffix. A dictionary
//! phrase matching the whole input always wins over the word-by-word result.
//! `prefer_phrases` only decides whether that phrase is tried first (and the
//! word pass skipped) or checked after the word pass.
//!
//! # Example
//!
//! ```
//! use lexmap::{Dictionary, TranslateOptions, Translator};
//!
//! let mut dict = Dictionary::new();
//! dict.merge_lines("hello = ya\nworld = mona\nalex = aleks");
//!
//! let translator = Translator::new(&dict, TranslateOptions::default());
//! assert_eq!(translator.translate("Hello, World!"), "Ya, Mona!");
//! assert_eq!(translator.translate("Alex's world"), "Aleks-de mona");
//! ```

use crate::casing::transfer_case;
use crate::dictionary::Dictionary;
use crate::token::{Token, tokenize};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Suffix appended to a translated word that carried an English possessive `'s`.
pub const POSSESSIVE_SUFFIX: &str = "-de";

const POSSESSIVE_MARKER: &str = "'s";

/// Switches read at translation time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateOptions {
    /// Try a whole-input phrase match before translating word by word
    #[serde(default, alias = "preferPhrases")]
    pub prefer_phrases: bool,
    /// Wrap words missing from the dictionary in brackets
    #[serde(default, alias = "markUnknown")]
    pub mark_unknown: bool,
}

/// Result of a translation, with feedback about how it was produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationReport {
    pub text: String,
    /// The whole input matched a dictionary phrase
    pub phrase_match: bool,
    /// Word tokens with no dictionary entry, in order of appearance
    pub unknown: Vec<String>,
    /// Number of word tokens replaced from the dictionary
    pub translated_words: usize,
}

/// Translates text against a borrowed dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    dictionary: &'a Dictionary,
    options: TranslateOptions,
}

impl<'a> Translator<'a> {
    pub fn new(dictionary: &'a Dictionary, options: TranslateOptions) -> Self {
        Translator {
            dictionary,
            options,
        }
    }

    pub fn translate(&self, text: &str) -> String {
        self.translate_with_report(text).text
    }

    pub fn translate_with_report(&self, text: &str) -> TranslationReport {
        if self.options.prefer_phrases {
            if let Some(report) = self.phrase_match(text) {
                return report;
            }
        }

        let report = self.translate_words(text);

        if !self.options.prefer_phrases {
            if let Some(phrase) = self.phrase_match(text) {
                return phrase;
            }
        }

        report
    }

    fn phrase_match(&self, text: &str) -> Option<TranslationReport> {
        let translation = self.dictionary.lookup_phrase(text)?;
        trace!("Phrase match for {:?}", text);
        Some(TranslationReport {
            text: translation.to_string(),
            phrase_match: true,
            ..TranslationReport::default()
        })
    }

    fn translate_words(&self, text: &str) -> TranslationReport {
        let mut report = TranslationReport {
            text: String::with_capacity(text.len()),
            ..TranslationReport::default()
        };

        for token in tokenize(text) {
            match token {
                Token::Separator(separator) => report.text.push_str(separator),
                Token::Word(word) => match self.translate_word(word) {
                    Some(translated) => {
                        report.text.push_str(&translated);
                        report.translated_words += 1;
                    }
                    None => {
                        if self.options.mark_unknown {
                            report.text.push('[');
                            report.text.push_str(word);
                            report.text.push(']');
                        } else {
                            report.text.push_str(word);
                        }
                        report.unknown.push(word.to_string());
                    }
                },
            }
        }

        report
    }

    /// Translates a single word token, or `None` when the dictionary has no
    /// usable entry for it.
    pub fn translate_word(&self, word: &str) -> Option<String> {
        let base = word.to_lowercase();
        let (key, possessive) = match base.strip_suffix(POSSESSIVE_MARKER) {
            Some(stem) if base.chars().count() > 2 => (stem, true),
            _ => (base.as_str(), false),
        };

        let found = self.dictionary.lookup_word(key)?;
        let mut translated = transfer_case(word, found);
        if possessive {
            translated.push_str(POSSESSIVE_SUFFIX);
        }
        Some(translated)
    }
}

/// Translates `text`, echoing it unchanged when no dictionary is available.
pub fn translate(text: &str, dictionary: Option<&Dictionary>, options: &TranslateOptions) -> String {
    match dictionary {
        Some(dictionary) => Translator::new(dictionary, *options).translate(text),
        None => text.to_string(),
    }
}
