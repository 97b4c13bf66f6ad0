use regex::Regex;
use std::sync::LazyLock;

/// Letters, optionally joined to a second run of letters by one apostrophe ("don't", "Alex's").
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+(?:'\p{L}+)?").expect("word pattern is valid"));

/// A slice of the input text, classified as a word or as the run of
/// characters between two words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a str),
    Separator(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(text) | Token::Separator(text) => text,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

/// Splits `input` into word and separator tokens.
///
/// Every character of the input lands in exactly one token and order is kept,
/// so concatenating the tokens gives back the input. Two word tokens are never
/// adjacent: a word match always stops at a non-letter character.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut position = 0;

    for word in WORD.find_iter(input) {
        if word.start() > position {
            tokens.push(Token::Separator(&input[position..word.start()]));
        }
        tokens.push(Token::Word(word.as_str()));
        position = word.end();
    }

    if position < input.len() {
        tokens.push(Token::Separator(&input[position..]));
    }

    tokens
}
