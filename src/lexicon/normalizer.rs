//*** START FILE: src/lexicon/normalizer.rs ***//
use serde_json::Value;

use crate::types::entry::{Alternatives, Entry};

/// Turns one raw dictionary record into an `Entry`. Never fails: missing or
/// wrong-typed fields fall back to empty strings, empty lists and `0.0`.
/// A record whose word is blank still produces an `Entry`; `load_all` drops it.
pub fn normalize(raw: &Value) -> Entry {
    let part_of_speech = raw
        .get("pos")
        .or_else(|| raw.get("partOfSpeech"))
        .map(coerce_text)
        .unwrap_or_default();

    Entry {
        word: raw.get("word").map(coerce_text).unwrap_or_default().trim().to_string(),
        part_of_speech,
        denotation: raw.get("denotation").map(coerce_text).unwrap_or_default(),
        connotation: coerce_list(raw.get("connotation")),
        formality: coerce_score(raw.get("formality")),
        intensity: coerce_score(raw.get("intensity")),
        alternatives: coerce_alternatives(raw.get("alternatives")),
    }
}

/// Normalizes every record, keeping input order and dropping blank words.
pub fn load_all(raw_list: &[Value]) -> Vec<Entry> {
    raw_list
        .iter()
        .map(normalize)
        .filter(|entry| !entry.word.is_empty())
        .collect()
}

/// A finite JSON number is kept as-is; anything else (absent, null, string,
/// bool, list, object) becomes `0.0`.
pub fn coerce_score(raw: Option<&Value>) -> f64 {
    match raw.and_then(Value::as_f64) {
        Some(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

// Scalars are stringified, falsy scalars (`0`, `false`, `null`) and containers become "".
fn coerce_text(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => String::new(),
    }
}

fn coerce_list(raw: Option<&Value>) -> Vec<String> {
    match raw {
        Some(Value::Array(items)) => items.iter().map(coerce_text).collect(),
        _ => Vec::new(),
    }
}

fn coerce_alternatives(raw: Option<&Value>) -> Alternatives {
    match raw {
        Some(obj @ Value::Object(_)) => Alternatives {
            softer: coerce_list(obj.get("softer")),
            stronger: coerce_list(obj.get("stronger")),
        },
        _ => Alternatives::default(),
    }
}

//*** END FILE: src/lexicon/normalizer.rs ***//
