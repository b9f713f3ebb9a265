//! Sentiment Labels
//!
//! The three classifier labels and the pure history computations the render
//! layer sits on: label parsing, display styling, client-side filtering and
//! aggregate counting. Records carrying a label outside the fixed three stay
//! in the history but are skipped by the aggregate and never match a
//! concrete filter.

use std::collections::HashMap;

use crate::api::client::ReviewRecord;

/// Classifier output label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// The fixed labels, in display order.
pub const ALL_SENTIMENTS: [Sentiment; 3] =
    [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

impl Sentiment {
    /// Parse a wire label; anything outside the fixed three is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Positive" => Some(Self::Positive),
            "Negative" => Some(Self::Negative),
            "Neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    /// Result heading shown for this label.
    pub fn headline(self) -> &'static str {
        match self {
            Self::Positive => "😀 Positive Review",
            Self::Negative => "😡 Negative Review",
            Self::Neutral => "😐 Neutral Review",
        }
    }

    /// Text color class for inline results.
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Positive => "text-green-400",
            Self::Negative => "text-red-400",
            Self::Neutral => "text-orange-400",
        }
    }

    /// Fill color for chart and probability bars.
    pub fn color(self) -> &'static str {
        match self {
            Self::Positive => "#4CAF50",
            Self::Negative => "#F44336",
            Self::Neutral => "#FF9800",
        }
    }
}

/// History filter: everything, or one concrete label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentimentFilter {
    All,
    Only(Sentiment),
}

impl SentimentFilter {
    /// Parse a filter dropdown value; unknown values read as `All`.
    pub fn from_value(value: &str) -> Self {
        match Sentiment::from_label(value) {
            Some(sentiment) => Self::Only(sentiment),
            None => Self::All,
        }
    }

    pub fn matches(self, record: &ReviewRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(sentiment) => Sentiment::from_label(&record.sentiment) == Some(sentiment),
        }
    }
}

/// Subsequence of `records` matching `filter`, relative order preserved.
/// Operates purely on the cached list; never triggers a fetch.
pub fn filter_reviews(records: &[ReviewRecord], filter: SentimentFilter) -> Vec<ReviewRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Counts for the three fixed labels, in [`ALL_SENTIMENTS`] order.
/// Unrecognized labels are skipped, not errored.
pub fn sentiment_counts(records: &[ReviewRecord]) -> [u32; 3] {
    let mut counts = [0u32; 3];
    for record in records {
        match Sentiment::from_label(&record.sentiment) {
            Some(Sentiment::Positive) => counts[0] += 1,
            Some(Sentiment::Negative) => counts[1] += 1,
            Some(Sentiment::Neutral) => counts[2] += 1,
            None => {}
        }
    }
    counts
}

/// Probability entries ordered for display: the fixed labels first, then any
/// extra labels the backend sent, alphabetically. Map iteration order is not
/// stable, so the bars need an explicit one.
pub fn ordered_probabilities(probabilities: &HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut entries = Vec::new();
    for sentiment in ALL_SENTIMENTS {
        if let Some(p) = probabilities.get(sentiment.label()) {
            entries.push((sentiment.label().to_string(), *p));
        }
    }
    let mut extras: Vec<(String, f64)> = probabilities
        .iter()
        .filter(|(label, _)| Sentiment::from_label(label).is_none())
        .map(|(label, p)| (label.clone(), *p))
        .collect();
    extras.sort_by(|a, b| a.0.cmp(&b.0));
    entries.extend(extras);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(review: &str, sentiment: &str) -> ReviewRecord {
        ReviewRecord {
            review: review.to_string(),
            sentiment: sentiment.to_string(),
            confidence: 90.0,
            timestamp: "2025-11-02 12:00:00".to_string(),
        }
    }

    #[test]
    fn unknown_label_parses_to_none() {
        assert_eq!(Sentiment::from_label("Positive"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_label("positive"), None);
        assert_eq!(Sentiment::from_label("Mixed"), None);
    }

    #[test]
    fn filter_all_returns_cached_sequence_unchanged() {
        let records = vec![
            record("good", "Positive"),
            record("bad", "Negative"),
            record("meh", "Neutral"),
        ];
        assert_eq!(filter_reviews(&records, SentimentFilter::All), records);
    }

    #[test]
    fn filter_keeps_only_matching_records_in_order() {
        let records = vec![
            record("a", "Positive"),
            record("b", "Negative"),
            record("c", "Positive"),
            record("d", "Mixed"),
        ];
        let filtered = filter_reviews(&records, SentimentFilter::Only(Sentiment::Positive));
        assert_eq!(
            filtered.iter().map(|r| r.review.as_str()).collect::<Vec<_>>(),
            ["a", "c"]
        );
    }

    #[test]
    fn counts_over_fixed_history() {
        let mut records = Vec::new();
        for _ in 0..5 {
            records.push(record("p", "Positive"));
        }
        for _ in 0..3 {
            records.push(record("n", "Negative"));
        }
        for _ in 0..2 {
            records.push(record("m", "Neutral"));
        }
        assert_eq!(sentiment_counts(&records), [5, 3, 2]);
    }

    #[test]
    fn counts_ignore_unrecognized_labels() {
        let records = vec![record("a", "Positive"), record("b", "Sarcastic")];
        assert_eq!(sentiment_counts(&records), [1, 0, 0]);
    }

    #[test]
    fn probabilities_keep_fixed_order_then_extras() {
        let mut probabilities = HashMap::new();
        probabilities.insert("Neutral".to_string(), 3.5);
        probabilities.insert("Positive".to_string(), 92.5);
        probabilities.insert("Negative".to_string(), 4.0);
        probabilities.insert("Other".to_string(), 0.1);

        let ordered = ordered_probabilities(&probabilities);
        let labels: Vec<&str> = ordered.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, ["Positive", "Negative", "Neutral", "Other"]);
        assert_eq!(ordered[0].1, 92.5);
    }
}
