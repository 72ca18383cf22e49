use std::cmp::Ordering;
use std::rc::Rc;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::entry::Entry;

/// Full entry set plus the search-filtered view the word list shows.
/// Entries are shared by `Rc` so the selection can refer to them by identity.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    entries: Vec<Rc<Entry>>,
    query: String,
    filtered: Vec<Rc<Entry>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entry set and refilters with the query already held.
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries.into_iter().map(Rc::new).collect();
        self.refilter();
    }

    /// Stores the lower-cased, trimmed query and refilters.
    pub fn set_query(&mut self, q: &str) {
        self.query = q.to_lowercase().trim().to_string();
        self.refilter();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn entries(&self) -> &[Rc<Entry>] {
        &self.entries
    }

    pub fn filtered(&self) -> &[Rc<Entry>] {
        &self.filtered
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, in sorted order, whose word equals `word` ignoring case and
    /// surrounding whitespace. Ignores the current query.
    pub fn find_word(&self, word: &str) -> Option<Rc<Entry>> {
        let wanted = word.trim().to_lowercase();
        let mut matches: Vec<&Rc<Entry>> = self
            .entries
            .iter()
            .filter(|e| e.word.to_lowercase() == wanted)
            .collect();
        matches.sort_by(|a, b| compare_words(&a.word, &b.word));
        matches.first().map(|e| Rc::clone(e))
    }

    fn refilter(&mut self) {
        let query = self.query.as_str();
        let mut filtered: Vec<Rc<Entry>> = self
            .entries
            .iter()
            .filter(|e| query.is_empty() || e.word.trim().to_lowercase().contains(query))
            .cloned()
            .collect();
        // sort_by is stable: identical words keep catalog order
        filtered.sort_by(|a, b| compare_words(&a.word, &b.word));
        self.filtered = filtered;
    }
}

/// Dictionary ordering for words. Letters compare without accents or case
/// first, so `éclair` files between `eagle` and `fable`. Remaining ties go
/// to unaccented before accented, then lowercase ahead of uppercase at the
/// first differing letter, then raw code-point order so the ordering is total.
pub fn compare_words(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

// NFD splits accented letters into base + combining mark; the marks are dropped.
fn base_key(word: &str) -> String {
    word.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn accent_key(word: &str) -> String {
    word.nfd().collect::<String>().to_lowercase()
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
