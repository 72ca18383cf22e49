//*** START FILE: src/types/entry.rs ***//
use serde::Serialize;

/// Softer / stronger substitutes listed for a word.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Alternatives {
    pub softer: Vec<String>,
    pub stronger: Vec<String>,
}

/// One normalized dictionary record. Built only by the normalizer and never
/// mutated afterwards.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Entry {
    pub word: String,
    pub part_of_speech: String,
    pub denotation: String,
    pub connotation: Vec<String>,
    pub formality: f64,
    pub intensity: f64,
    pub alternatives: Alternatives,
}

impl Entry {
    /// Label used in the word list tooltip; falls back to "word" when no part of speech is known.
    pub fn pos_label(&self) -> &str {
        if self.part_of_speech.is_empty() {
            "word"
        } else {
            &self.part_of_speech
        }
    }
}
//*** END FILE: src/types/entry.rs ***//
