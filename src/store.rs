use crate::Dictionary;
use crate::error::{LexError, LexResult};
use crate::loader::{dictionary_to_json, load_dictionary_from_file};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The persisted, user-extended dictionary.
///
/// Writes go to a sibling temp file which is then renamed over the target, so
/// a reader sees either the previous dictionary or the complete new one.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    path: PathBuf,
}

impl DictionaryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DictionaryStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored dictionary, or the built-in one if nothing is stored.
    pub fn load(&self) -> LexResult<Dictionary> {
        if !self.path.exists() {
            debug!(
                "No dictionary stored at {}, using the built-in dictionary",
                self.path.display()
            );
            return Ok(Dictionary::builtin());
        }
        load_dictionary_from_file(&self.path)
    }

    pub fn save(&self, dictionary: &Dictionary) -> LexResult<()> {
        let json = dictionary_to_json(dictionary)?;
        write_atomic(&self.path, json.as_bytes())?;
        info!(
            "Saved {} words and {} phrases to {}",
            dictionary.word_count(),
            dictionary.phrase_count(),
            self.path.display()
        );
        Ok(())
    }

    /// Replaces the stored dictionary with the built-in one.
    pub fn reset(&self) -> LexResult<Dictionary> {
        let dictionary = Dictionary::builtin();
        self.save(&dictionary)?;
        info!("Reset dictionary at {}", self.path.display());
        Ok(dictionary)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> LexResult<()> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| LexError::io(parent, e))?;
        }
    }

    fs::write(&tmp, bytes).map_err(|e| LexError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(LexError::io(path, e));
    }

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("dictionary.json");
    path.with_file_name(format!("{file_name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_file_gives_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let store = DictionaryStore::new(dir.path().join("dict.json"));
        assert_eq!(store.load().unwrap(), Dictionary::builtin());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = DictionaryStore::new(dir.path().join("nested").join("dict.json"));

        let mut dict = Dictionary::new();
        dict.merge_lines("hello = ya\ngood morning = yara muna");
        store.save(&dict).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, dict);
        assert!(!dir.path().join("nested").join("dict.json.tmp").exists());
    }

    #[test]
    fn test_save_replaces_previous() {
        let dir = tempfile::tempdir().unwrap();
        let store = DictionaryStore::new(dir.path().join("dict.json"));

        let mut dict = Dictionary::new();
        dict.merge_lines("hello = ya");
        store.save(&dict).unwrap();
        dict.merge_lines("hello = yo\nworld = mona");
        store.save(&dict).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.lookup_word("hello"), Some("yo"));
        assert_eq!(loaded.word_count(), 2);
    }

    #[test]
    fn test_failed_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the target path makes the final rename fail.
        let target = dir.path().join("dict.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), b"x").unwrap();

        let store = DictionaryStore::new(&target);
        let err = store.save(&Dictionary::builtin()).unwrap_err();
        assert!(matches!(err, LexError::Io { .. }));
        assert!(!dir.path().join("dict.json.tmp").exists());
    }

    #[test]
    fn test_reset() {
        let dir = tempfile::tempdir().unwrap();
        let store = DictionaryStore::new(dir.path().join("dict.json"));

        let mut dict = Dictionary::new();
        dict.merge_lines("zzz = custom");
        store.save(&dict).unwrap();

        let reset = store.reset().unwrap();
        assert_eq!(reset, Dictionary::builtin());
        assert_eq!(store.load().unwrap().lookup_word("zzz"), None);
    }
}
