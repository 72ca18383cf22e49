use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;

use crate::types::entry::Entry;

/// Most tags a summary reports.
pub const TOP_TAG_LIMIT: usize = 8;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Tone snapshot of the current selection. Rebuilt from scratch on every
/// change; nothing here is cached between calls.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_formality: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_intensity: Option<f64>,
    pub top_tags: Vec<TagCount>,
    pub sentence: Vec<String>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

/// Builds the summary for `items` in selection order.
///
/// Averages are rounded half away from zero to one decimal. Tags are
/// lower-cased and trimmed before counting (blank tags included), ranked by
/// count with ties left in first-seen order, and cut to `TOP_TAG_LIMIT`.
pub fn summarize(items: &[Rc<Entry>]) -> Summary {
    let word_count = items.len();
    if word_count == 0 {
        return Summary::default();
    }

    let mut formality_sum = 0.0;
    let mut intensity_sum = 0.0;
    // Vec keeps first-seen order, the map only indexes into it
    let mut tag_counts: Vec<TagCount> = Vec::new();
    let mut tag_index: HashMap<String, usize> = HashMap::new();

    for item in items {
        formality_sum += item.formality;
        intensity_sum += item.intensity;
        for raw_tag in &item.connotation {
            let tag = raw_tag.to_lowercase().trim().to_string();
            match tag_index.get(&tag) {
                Some(&idx) => tag_counts[idx].count += 1,
                None => {
                    tag_index.insert(tag.clone(), tag_counts.len());
                    tag_counts.push(TagCount { tag, count: 1 });
                }
            }
        }
    }

    tag_counts.sort_by(|a, b| b.count.cmp(&a.count));
    tag_counts.truncate(TOP_TAG_LIMIT);

    Summary {
        word_count,
        avg_formality: Some(round_one_decimal(formality_sum / word_count as f64)),
        avg_intensity: Some(round_one_decimal(intensity_sum / word_count as f64)),
        top_tags: tag_counts,
        sentence: items.iter().map(|e| e.word.clone()).collect(),
    }
}

/// Rounds to one decimal place, halves away from zero (`f64::round`).
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, tags: &[&str], formality: f64, intensity: f64) -> Rc<Entry> {
        Rc::new(Entry {
            word: word.to_string(),
            connotation: tags.iter().map(|t| t.to_string()).collect(),
            formality,
            intensity,
            ..Default::default()
        })
    }

    fn tags(summary: &Summary) -> Vec<(&str, usize)> {
        summary.top_tags.iter().map(|t| (t.tag.as_str(), t.count)).collect()
    }

    #[test]
    fn empty_selection_has_no_averages() {
        let summary = summarize(&[]);
        assert_eq!(summary.word_count, 0);
        assert!(summary.avg_formality.is_none());
        assert!(summary.avg_intensity.is_none());
        assert!(summary.top_tags.is_empty());
        assert!(summary.sentence.is_empty());
        assert!(summary.is_empty());
    }

    #[test]
    fn happy_ecstatic_snapshot() {
        let items = vec![
            entry("happy", &["positive", "casual"], 2.0, 5.0),
            entry("ecstatic", &["positive", "intense"], 3.0, 9.0),
        ];
        let summary = summarize(&items);
        assert_eq!(summary.word_count, 2);
        assert_eq!(summary.sentence, vec!["happy", "ecstatic"]);
        assert_eq!(summary.avg_formality, Some(2.5));
        assert_eq!(summary.avg_intensity, Some(7.0));
        assert_eq!(tags(&summary), vec![("positive", 2), ("casual", 1), ("intense", 1)]);
    }

    #[test]
    fn tags_are_normalized_before_counting() {
        let items = vec![entry("a", &[" Warm", "warm ", "WARM", "", " "], 0.0, 0.0)];
        let summary = summarize(&items);
        assert_eq!(tags(&summary), vec![("warm", 3), ("", 2)]);
    }

    #[test]
    fn top_tags_are_capped_and_ordered() {
        let many: Vec<String> = (0..12).map(|i| format!("t{i}")).collect();
        let many_refs: Vec<&str> = many.iter().map(String::as_str).collect();
        let items = vec![
            entry("one", &many_refs, 0.0, 0.0),
            entry("two", &["t11", "t5"], 0.0, 0.0),
        ];
        let summary = summarize(&items);
        assert_eq!(summary.top_tags.len(), TOP_TAG_LIMIT);
        assert_eq!(tags(&summary)[..3], [("t5", 2), ("t11", 2), ("t0", 1)]);
        assert!(summary.top_tags.windows(2).all(|w| w[0].count >= w[1].count));
        assert!(summary.top_tags.iter().all(|t| t.count > 0));
    }

    #[test]
    fn duplicate_picks_repeat_in_sentence_and_counts() {
        let happy = entry("happy", &["positive"], 1.0, 2.0);
        let summary = summarize(&[Rc::clone(&happy), Rc::clone(&happy)]);
        assert_eq!(summary.sentence, vec!["happy", "happy"]);
        assert_eq!(tags(&summary), vec![("positive", 2)]);
        assert_eq!(summary.avg_formality, Some(1.0));
    }

    #[test]
    fn averages_round_half_away_from_zero() {
        // 0.25 is exact in binary, so this pins the tie rule
        let items = vec![entry("a", &[], 0.5, -0.5), entry("b", &[], 0.0, 0.0)];
        let summary = summarize(&items);
        assert_eq!(summary.avg_formality, Some(0.3));
        assert_eq!(summary.avg_intensity, Some(-0.3));

        assert_eq!(round_one_decimal(2.5), 2.5);
        assert_eq!(round_one_decimal(1.0 / 3.0), 0.3);
        assert_eq!(round_one_decimal(2.0 / 3.0), 0.7);
    }

    #[test]
    fn serialized_summary_omits_absent_averages() {
        let json = serde_json::to_value(summarize(&[])).unwrap();
        assert!(json.get("avg_formality").is_none());
        assert_eq!(json["word_count"], 0);
    }
}
