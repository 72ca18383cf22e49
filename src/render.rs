//! Text projections of the session's derived views. The CLI prints these
//! directly; the GUI reuses the card and summary labels.

use serde::Serialize;
use std::rc::Rc;

use crate::lexicon::Summary;
use crate::types::entry::Entry;

pub const EMPTY_SENTENCE: &str = "No words selected yet.";
pub const EMPTY_DETAILS: &str = "Select words to see denotation + connotation.";
pub const EMPTY_SUMMARY: &str = "No summary yet.";
pub const SNAPSHOT_TITLE: &str = "Overall tone snapshot";

const NONE_MARK: &str = "—";

/// Per-word detail card, already flattened to display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailCard {
    pub word: String,
    pub part_of_speech: String,
    pub denotation: String,
    pub tags: Vec<String>,
    pub formality: String,
    pub intensity: String,
    pub alternatives: String,
}

impl DetailCard {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            word: entry.word.clone(),
            part_of_speech: entry.part_of_speech.clone(),
            denotation: entry.denotation.clone(),
            tags: entry.connotation.clone(),
            formality: format!("formality: {}", entry.formality),
            intensity: format!("intensity: {}", entry.intensity),
            alternatives: format!(
                "Softer: {} • Stronger: {}",
                join_or_mark(&entry.alternatives.softer),
                join_or_mark(&entry.alternatives.stronger)
            ),
        }
    }
}

fn join_or_mark(words: &[String]) -> String {
    if words.is_empty() {
        NONE_MARK.to_string()
    } else {
        words.join(", ")
    }
}

pub fn detail_cards(items: &[Rc<Entry>]) -> Vec<DetailCard> {
    items.iter().map(|e| DetailCard::from_entry(e)).collect()
}

/// One word-list line: `word • pos`, with "word" standing in for a missing pos.
pub fn word_list_line(entry: &Entry) -> String {
    format!("{} • {}", entry.word, entry.pos_label())
}

pub fn sentence_strip(items: &[Rc<Entry>]) -> String {
    if items.is_empty() {
        return EMPTY_SENTENCE.to_string();
    }
    items
        .iter()
        .enumerate()
        .map(|(idx, e)| format!("[{}] {}", idx, e.word))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn render_details(items: &[Rc<Entry>]) -> String {
    if items.is_empty() {
        return EMPTY_DETAILS.to_string();
    }
    let mut out = String::new();
    for card in detail_cards(items) {
        out.push_str(&format!("{}  ({})\n", card.word, card.part_of_speech));
        if !card.denotation.is_empty() {
            out.push_str(&format!("  {}\n", card.denotation));
        }
        if !card.tags.is_empty() {
            out.push_str(&format!("  tags: {}\n", card.tags.join(", ")));
        }
        out.push_str(&format!("  {} | {}\n", card.formality, card.intensity));
        out.push_str(&format!("  {}\n", card.alternatives));
    }
    out.trim_end().to_string()
}

/// Machine-readable result of a build: the picked entries in order plus the summary.
#[derive(Serialize, Debug)]
pub struct BuildReport<'a> {
    pub selection: Vec<&'a Entry>,
    pub summary: &'a Summary,
}

impl<'a> BuildReport<'a> {
    pub fn new(items: &'a [Rc<Entry>], summary: &'a Summary) -> Self {
        Self {
            selection: items.iter().map(|e| e.as_ref()).collect(),
            summary,
        }
    }
}

/// `"Avg formality: X.X • Avg intensity: Y.Y"`; `None` for an empty summary.
pub fn averages_line(summary: &Summary) -> Option<String> {
    match (summary.avg_formality, summary.avg_intensity) {
        (Some(f), Some(i)) => Some(format!("Avg formality: {:.1} • Avg intensity: {:.1}", f, i)),
        _ => None,
    }
}

pub fn tag_chips(summary: &Summary) -> Vec<String> {
    summary
        .top_tags
        .iter()
        .map(|t| format!("{} ({})", t.tag, t.count))
        .collect()
}

pub fn sentence_line(summary: &Summary) -> String {
    format!("Sentence: {}", summary.sentence.join(" "))
}

pub fn render_summary(summary: &Summary) -> String {
    let averages = match averages_line(summary) {
        Some(line) => line,
        None => return EMPTY_SUMMARY.to_string(),
    };
    let mut lines = vec![
        format!("{} ({} word(s))", SNAPSHOT_TITLE, summary.word_count),
        averages,
    ];
    let chips = tag_chips(summary);
    if !chips.is_empty() {
        lines.push(chips.join("  "));
    }
    lines.push(sentence_line(summary));
    lines.join("\n")
}
