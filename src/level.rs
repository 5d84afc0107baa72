//! Level data: the text shown with a puzzle and the words hidden in it.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{placement::normalize, registry::reversed, Result};

/// One level. `highlighted_words[i]` is how `words[i]` appears in `text`, for example with a different inflection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelData {
    /// The text shown alongside the grid.
    #[serde(default)]
    pub text: String,

    /// The words to hide in the grid.
    #[serde(default)]
    pub words: Vec<String>,

    /// The display form of each word, parallel to `words`.
    #[serde(default, alias = "hilighted_words")]
    pub highlighted_words: Vec<String>,
}

impl LevelData {
    /// Creates a level whose words are shown as they are.
    pub fn new(text: impl Into<String>, words: &[&str]) -> Self {
        let words: Vec<String> = words.iter().map(|word| word.to_string()).collect();

        Self {
            text: text.into(),
            highlighted_words: words.clone(),
            words,
        }
    }

    /// Parses a level from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON level file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// The index in `words` of `word`, compared trimmed and without case, in either direction.
    pub fn word_index(&self, word: &str) -> Option<usize> {
        let word = normalize(word)?;
        let backwards = reversed(&word);

        self.words
            .iter()
            .position(|candidate| normalize(candidate).is_some_and(|c| c == word || c == backwards))
    }

    /// The display form of `word`, if the level has one for it.
    pub fn highlighted_form(&self, word: &str) -> Option<&str> {
        let index = self.word_index(word)?;

        self.highlighted_words.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::LevelData;

    const LEVEL: &str = r#"{
        "text": "The cats sat in the sun.",
        "words": ["Cat", "sun"],
        "hilighted_words": ["cats", "sun"]
    }"#;

    #[test]
    fn parse_level() {
        let level = LevelData::from_json(LEVEL).unwrap();

        assert_eq!(level.words, vec!["Cat", "sun"]);
        assert_eq!(level.highlighted_words, vec!["cats", "sun"]);
    }

    #[test]
    fn missing_fields_default() {
        let level = LevelData::from_json(r#"{"words": ["a"]}"#).unwrap();

        assert!(level.text.is_empty());
        assert!(level.highlighted_words.is_empty());
        assert_eq!(level.highlighted_form("a"), None);
    }

    #[test]
    fn bad_json() {
        assert!(matches!(
            LevelData::from_json("{\"words\": 3}"),
            Err(crate::Error::Json(_))
        ));
    }

    #[test]
    fn highlighted_form_of_either_orientation() {
        let level = LevelData::from_json(LEVEL).unwrap();

        assert_eq!(level.highlighted_form("cat"), Some("cats"));
        assert_eq!(level.highlighted_form("TAC"), Some("cats"));
        assert_eq!(level.highlighted_form("nus"), Some("sun"));
        assert_eq!(level.highlighted_form("dog"), None);
    }
}
