//! Rule-based bilingual word and phrase substitution.
//!
//! English text is split into word and separator tokens, each word is looked
//! up in a [`Dictionary`] and re-cased after the original, and the pieces are
//! joined back so punctuation and spacing come out exactly as they went in.
//! Whole-input phrases take precedence over word-by-word output.

pub mod casing;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod loader;
pub mod merge;
pub mod store;
pub mod token;
pub mod translator;

// Re-export the engine surface for convenient access
pub use casing::{CaseShape, transfer_case};
pub use config::Config;
pub use dictionary::{Dictionary, StructuredEntry, WordEntry, normalize_key};
pub use error::{LexError, LexResult};
pub use loader::{dictionary_to_json, load_dictionary_from_file, parse_dictionary};
pub use merge::{MergeSummary, merge_lines};
pub use store::DictionaryStore;
pub use token::{Token, tokenize};
pub use translator::{
    POSSESSIVE_SUFFIX, TranslateOptions, TranslationReport, Translator, translate,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_property() {
        let inputs = [
            "Hello, World!",
            "Alex's dog doesn't bark -- ever.",
            "\t\n  ",
            "123 + 456 = 579",
        ];
        for input in inputs {
            let joined: String = tokenize(input).iter().map(Token::as_str).collect();
            assert_eq!(joined, input);
        }
    }

    #[test]
    fn test_end_to_end_with_merged_lines() {
        let (dict, summary) = merge_lines(
            "hello = ya\nworld = mona\nalex = aleks\ngood morning = yara muna",
            Dictionary::new(),
        );
        assert_eq!(summary.added(), 4);

        let options = TranslateOptions::default();
        assert_eq!(
            translate("HELLO, Alex's World!", Some(&dict), &options),
            "YA, Aleks-de Mona!"
        );
        assert_eq!(translate("Good Morning", Some(&dict), &options), "yara muna");

        let marked = TranslateOptions {
            prefer_phrases: true,
            mark_unknown: true,
        };
        assert_eq!(
            translate("hello zzz world", Some(&dict), &marked),
            "ya [zzz] mona"
        );
    }

    #[test]
    fn test_builtin_dictionary_translates() {
        let dict = Dictionary::builtin();
        let translator = Translator::new(&dict, TranslateOptions::default());
        assert_eq!(translator.translate("Hello, friend."), "Ya, kalo.");
        assert_eq!(translator.translate("Thank you"), "danita");
    }
}
