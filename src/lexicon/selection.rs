use std::rc::Rc;

use crate::types::entry::Entry;

/// The ordered pick list that forms the sentence. Holds catalog entries by
/// identity; the same entry may appear any number of times.
#[derive(Debug, Default, Clone)]
pub struct Selection {
    items: Vec<Rc<Entry>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: Rc<Entry>) {
        self.items.push(entry);
    }

    /// Removes the occurrence at `index`. Stale indices are ignored and
    /// return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<Rc<Entry>> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Rc<Entry>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if this exact entry (not merely an equal word) has been picked.
    pub fn contains(&self, entry: &Rc<Entry>) -> bool {
        self.items.iter().any(|item| Rc::ptr_eq(item, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> Rc<Entry> {
        Rc::new(Entry {
            word: word.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn append_then_remove_last_restores_items() {
        let mut selection = Selection::new();
        selection.append(entry("quiet"));
        selection.append(entry("storm"));
        let before: Vec<Rc<Entry>> = selection.items().to_vec();

        selection.append(entry("rage"));
        let removed = selection.remove_at(selection.len() - 1);
        assert_eq!(removed.map(|e| e.word.clone()).as_deref(), Some("rage"));

        assert_eq!(selection.len(), before.len());
        for (a, b) in selection.items().iter().zip(&before) {
            assert!(Rc::ptr_eq(a, b));
        }
    }

    #[test]
    fn duplicates_share_identity() {
        let happy = entry("happy");
        let mut selection = Selection::new();
        selection.append(Rc::clone(&happy));
        selection.append(Rc::clone(&happy));
        assert_eq!(selection.len(), 2);

        selection.remove_at(0);
        assert_eq!(selection.len(), 1);
        assert!(Rc::ptr_eq(&selection.items()[0], &happy));
        assert!(selection.contains(&happy));
    }

    #[test]
    fn remove_shifts_later_items_left() {
        let mut selection = Selection::new();
        for w in ["a", "b", "c"] {
            selection.append(entry(w));
        }
        selection.remove_at(1);
        let words: Vec<&str> = selection.items().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["a", "c"]);
    }

    #[test]
    fn out_of_range_remove_is_ignored() {
        let mut selection = Selection::new();
        selection.append(entry("only"));
        assert!(selection.remove_at(1).is_none());
        assert!(selection.remove_at(usize::MAX).is_none());
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn contains_checks_identity_not_equality() {
        let mut selection = Selection::new();
        selection.append(entry("twin"));
        assert!(!selection.contains(&entry("twin")));
    }

    #[test]
    fn clear_empties() {
        let mut selection = Selection::new();
        selection.append(entry("x"));
        selection.clear();
        assert!(selection.is_empty());
    }
}
