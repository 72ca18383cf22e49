use std::rc::Rc;
use tracing::{debug, error};

use crate::error::LoadError;
use crate::lexicon::{summarize, Catalog, Selection, Summary};
use crate::types::entry::Entry;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Everything a front end reads and mutates: catalog, selection, the current
/// summary and where the dictionary load stands. Each mutation recomputes
/// the derived views before returning, so a front end can re-read right away.
#[derive(Debug)]
pub struct SentenceSession {
    catalog: Catalog,
    selection: Selection,
    summary: Summary,
    load_state: LoadState,
}

impl Default for SentenceSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSession {
    /// Starts empty and waiting on the dictionary.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            selection: Selection::new(),
            summary: Summary::default(),
            load_state: LoadState::Loading,
        }
    }

    /// Session over an already normalized entry list.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        let mut session = Self::new();
        session.finish_load(Ok(entries));
        session
    }

    /// Applies the result of the one dictionary request. A failure leaves the
    /// catalog empty and keeps a single message for the status line.
    pub fn finish_load(&mut self, result: Result<Vec<Entry>, LoadError>) {
        match result {
            Ok(entries) => {
                self.catalog.set_entries(entries);
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                error!("Dictionary load failed: {}", e);
                self.catalog.set_entries(Vec::new());
                self.load_state = LoadState::Failed(format!("Error: {}", e));
            }
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filtered(&self) -> &[Rc<Entry>] {
        self.catalog.filtered()
    }

    pub fn selection(&self) -> &[Rc<Entry>] {
        self.selection.items()
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn is_selected(&self, entry: &Rc<Entry>) -> bool {
        self.selection.contains(entry)
    }

    /// `"<shown> word(s) shown • <total> total"`, or the load message.
    pub fn status_line(&self) -> String {
        match &self.load_state {
            LoadState::Loading => "Loading dictionary…".to_string(),
            LoadState::Failed(msg) => msg.clone(),
            LoadState::Ready => format!(
                "{} word(s) shown • {} total",
                self.catalog.filtered().len(),
                self.catalog.len()
            ),
        }
    }

    pub fn set_query(&mut self, text: &str) {
        self.catalog.set_query(text);
        debug!(query = self.catalog.query(), shown = self.catalog.filtered().len(), "Search updated");
    }

    pub fn pick(&mut self, entry: &Rc<Entry>) {
        self.selection.append(Rc::clone(entry));
        debug!(word = %entry.word, "Picked word");
        self.refresh_summary();
    }

    /// Picks the catalog entry spelled `word` (case-insensitive). Returns
    /// `false` if the dictionary has no such word.
    pub fn pick_word(&mut self, word: &str) -> bool {
        match self.catalog.find_word(word) {
            Some(entry) => {
                self.pick(&entry);
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) {
        match self.selection.remove_at(index) {
            Some(removed) => debug!(index, word = %removed.word, "Removed word"),
            None => debug!(index, "Ignored stale removal index"),
        }
        self.refresh_summary();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.refresh_summary();
    }

    fn refresh_summary(&mut self) {
        self.summary = summarize(self.selection.items());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(word: &str, tags: &[&str], formality: f64, intensity: f64) -> Entry {
        Entry {
            word: word.to_string(),
            connotation: tags.iter().map(|t| t.to_string()).collect(),
            formality,
            intensity,
            ..Default::default()
        }
    }

    fn session() -> SentenceSession {
        SentenceSession::with_entries(vec![
            entry("happy", &["positive", "casual"], 2.0, 5.0),
            entry("ecstatic", &["positive", "intense"], 3.0, 9.0),
        ])
    }

    #[test]
    fn new_session_is_loading_and_empty() {
        let session = SentenceSession::new();
        assert_eq!(session.load_state(), &LoadState::Loading);
        assert!(session.filtered().is_empty());
        assert!(session.summary().is_empty());
    }

    #[test]
    fn summary_tracks_every_mutation() {
        let mut session = session();
        let happy = Rc::clone(&session.filtered()[1]);
        let ecstatic = Rc::clone(&session.filtered()[0]);

        session.pick(&happy);
        session.pick(&ecstatic);
        assert_eq!(session.summary().word_count, 2);
        assert_eq!(session.summary().avg_formality, Some(2.5));

        session.remove_at(0);
        assert_eq!(session.summary().sentence, vec!["ecstatic"]);

        session.remove_at(5);
        assert_eq!(session.summary().word_count, 1);

        session.clear_selection();
        assert!(session.summary().is_empty());
        assert!(session.selection().is_empty());
    }

    #[test]
    fn is_selected_follows_identity() {
        let mut session = session();
        let happy = Rc::clone(&session.filtered()[1]);
        assert!(!session.is_selected(&happy));
        session.pick(&happy);
        assert!(session.is_selected(&happy));
    }

    #[test]
    fn status_line_counts_filtered_and_total() {
        let mut session = session();
        assert_eq!(session.status_line(), "2 word(s) shown • 2 total");
        session.set_query("ha");
        assert_eq!(session.status_line(), "1 word(s) shown • 2 total");
    }

    #[test]
    fn failed_load_empties_catalog_and_reports_once() {
        let mut session = session();
        session.finish_load(Err(LoadError::NotAList {
            path: PathBuf::from("dictionary.json"),
        }));
        assert!(session.catalog().is_empty());
        assert!(session.filtered().is_empty());
        assert_eq!(
            session.load_error(),
            Some("Error: dictionary.json does not contain a list of word records")
        );
        assert_eq!(session.status_line(), session.load_error().unwrap());
    }

    #[test]
    fn pick_word_uses_full_catalog() {
        let mut session = session();
        session.set_query("ecs");
        assert!(session.pick_word("Happy"));
        assert!(!session.pick_word("sad"));
        assert_eq!(session.summary().sentence, vec!["happy"]);
    }
}
