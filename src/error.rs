use std::path::Path;

/// Errors raised at the I/O boundary of the engine.
///
/// Tokenizing, lookups, translation and line merges are total and never
/// produce one of these; only reading and writing dictionary files does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Reading or writing a file failed
    Io { path: String, message: String },
    /// A dictionary file did not contain valid JSON
    Parse { path: String, message: String },
    /// The JSON document is valid but cannot be a dictionary (root is not an object)
    InvalidDictionary(String),
    /// Invalid runtime configuration
    Config(String),
}

impl LexError {
    pub fn io(path: &Path, err: impl std::fmt::Display) -> Self {
        LexError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn parse(path: &Path, err: impl std::fmt::Display) -> Self {
        LexError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::Io { path, message } => write!(f, "Failed to access '{}': {}", path, message),
            LexError::Parse { path, message } => {
                write!(f, "Failed to parse JSON from '{}': {}", path, message)
            }
            LexError::InvalidDictionary(msg) => write!(f, "Invalid dictionary: {}", msg),
            LexError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for LexError {}

/// Result type for dictionary I/O
pub type LexResult<T> = Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_includes_path() {
        let err = LexError::io(&PathBuf::from("/tmp/dict.json"), "permission denied");
        assert_eq!(
            err.to_string(),
            "Failed to access '/tmp/dict.json': permission denied"
        );
    }

    #[test]
    fn test_display_invalid_dictionary() {
        let err = LexError::InvalidDictionary("root must be an object".to_string());
        assert_eq!(err.to_string(), "Invalid dictionary: root must be an object");
    }
}
