//! The level text with every found word picked out.

use fancy_regex::{escape, Captures, Regex};

use crate::level::LevelData;

/// Tracks which display forms of a level's words have been found and rebuilds the level text with them marked.
#[derive(Clone, Debug, Default)]
pub struct LevelHint {
    level: LevelData,
    highlighted: Vec<String>,
}

impl LevelHint {
    /// Starts tracking `level` with nothing found yet.
    pub fn new(level: LevelData) -> Self {
        Self {
            level,
            highlighted: Vec::new(),
        }
    }

    /// The level being tracked.
    pub fn level(&self) -> &LevelData {
        &self.level
    }

    /// The display forms found so far.
    pub fn highlighted(&self) -> &[String] {
        &self.highlighted
    }

    /// Marks the display form of `word` as found. Returns that form, or [`Option::None`] if the level has none.
    pub fn mark_found(&mut self, word: &str) -> Option<&str> {
        let form = self.level.highlighted_form(word)?.to_string();
        let lower = form.to_lowercase();
        self.insert(form);

        self.highlighted
            .iter()
            .find(|existing| existing.to_lowercase() == lower)
            .map(String::as_str)
    }

    /// Marks every display form as found.
    pub fn highlight_all(&mut self) {
        for form in self.level.highlighted_words.clone() {
            self.insert(form);
        }
    }

    fn insert(&mut self, form: String) {
        if form.trim().is_empty() {
            return;
        }

        let lower = form.to_lowercase();
        if !self.highlighted.iter().any(|existing| existing.to_lowercase() == lower) {
            self.highlighted.push(form);
        }
    }

    /// The palette index for the display form `form`: its position in the level's highlighted words.
    pub fn color_index(&self, form: &str) -> Option<usize> {
        let lower = form.to_lowercase();

        self.level
            .highlighted_words
            .iter()
            .position(|candidate| candidate.to_lowercase() == lower)
    }

    /// Rebuilds the level text, replacing every occurrence of a found display form (ignoring case, longest forms
    /// first) with `marker(matched_text, color_index)`. Forms missing from the level's list get index 0.
    pub fn render(&self, mut marker: impl FnMut(&str, usize) -> String) -> String {
        let Some(pattern) = self.pattern() else {
            return self.level.text.clone();
        };

        let regex = match Regex::new(&pattern) {
            Ok(regex) => regex,
            Err(e) => {
                log::warn!("could not build highlight pattern: {e}");
                return self.level.text.clone();
            }
        };

        regex
            .replace_all(&self.level.text, |caps: &Captures| {
                let matched = caps.get(0).map_or("", |m| m.as_str());
                marker(matched, self.color_index(matched).unwrap_or(0))
            })
            .into_owned()
    }

    fn pattern(&self) -> Option<String> {
        let mut forms: Vec<&String> = self.highlighted.iter().collect();
        forms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        if forms.is_empty() {
            return None;
        }

        let alternatives: Vec<String> = forms.iter().map(|form| escape(form).into_owned()).collect();

        Some(format!("(?i)(?:{})", alternatives.join("|")))
    }
}

#[cfg(test)]
mod tests {
    use super::LevelHint;
    use crate::level::LevelData;

    fn level() -> LevelData {
        LevelData {
            text: "Cats nap; a cat naps in the sun.".to_string(),
            words: vec!["cat".to_string(), "nap".to_string(), "sun".to_string()],
            highlighted_words: vec!["cat".to_string(), "naps".to_string(), "sun".to_string()],
        }
    }

    fn brackets(word: &str, color: usize) -> String {
        format!("[{word}:{color}]")
    }

    #[test]
    fn nothing_found_leaves_text() {
        let hint = LevelHint::new(level());

        assert_eq!(hint.render(brackets), "Cats nap; a cat naps in the sun.");
    }

    #[test]
    fn found_words_are_marked_ignoring_case() {
        let mut hint = LevelHint::new(level());

        assert_eq!(hint.mark_found("tac"), Some("cat"));
        assert_eq!(
            hint.render(brackets),
            "[Cat:0]s nap; a [cat:0] naps in the sun."
        );
    }

    #[test]
    fn longer_forms_win() {
        let mut hint = LevelHint::new(level());
        hint.highlight_all();

        assert_eq!(hint.highlighted().len(), 3);
        assert_eq!(
            hint.render(brackets),
            "[Cat:0]s nap; a [cat:0] [naps:1] in the [sun:2]."
        );
    }

    #[test]
    fn unknown_word_is_not_marked() {
        let mut hint = LevelHint::new(level());

        assert_eq!(hint.mark_found("dog"), None);
        assert!(hint.highlighted().is_empty());
    }
}
