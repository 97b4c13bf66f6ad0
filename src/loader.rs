use crate::Dictionary;
use crate::error::{LexError, LexResult};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Parse a dictionary from JSON text
///
/// The JSON should have the following structure:
/// ```json
/// {
///     "meta": { ... },                       // Kept, not used for translation
///     "words": {
///         "hello": "ya",
///         "friend": { "translation": "kalo", "pos": "noun" }
///     },
///     "phrases": { "good morning": "yara muna" }
/// }
/// ```
///
/// # Errors
/// - Invalid JSON
/// - Root is not an object
///
/// Missing or malformed sections are not errors; they load as empty.
pub fn parse_dictionary(content: &str, origin: &Path) -> LexResult<Dictionary> {
    let json: Value = serde_json::from_str(content).map_err(|e| LexError::parse(origin, e))?;

    if !json.is_object() {
        return Err(LexError::InvalidDictionary(format!(
            "root of '{}' must be an object",
            origin.display()
        )));
    }

    Ok(Dictionary::from(json))
}

/// Load a dictionary from a single JSON file
pub fn load_dictionary_from_file(path: &Path) -> LexResult<Dictionary> {
    let content = fs::read_to_string(path).map_err(|e| LexError::io(path, e))?;
    let dictionary = parse_dictionary(&content, path)?;

    info!(
        "Loaded {} words and {} phrases from {}",
        dictionary.word_count(),
        dictionary.phrase_count(),
        path.display()
    );

    Ok(dictionary)
}

/// Serialize a dictionary to pretty-printed JSON
pub fn dictionary_to_json(dictionary: &Dictionary) -> LexResult<String> {
    serde_json::to_string_pretty(dictionary)
        .map_err(|e| LexError::InvalidDictionary(e.to_string()))
}
