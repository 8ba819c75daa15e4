//! Keyword-counting fallback used when the prediction service is unreachable.

use crate::domain::model::{PredictionResult, PredictionSource, SentimentLabel};
use crate::domain::ports::RandomSource;
use crate::utils::numeric::round_half_up;

pub const POSITIVE_WORDS: [&str; 13] = [
    "great",
    "excellent",
    "amazing",
    "love",
    "best",
    "wonderful",
    "fantastic",
    "perfect",
    "awesome",
    "good",
    "happy",
    "satisfied",
    "recommend",
];

pub const NEGATIVE_WORDS: [&str; 12] = [
    "bad",
    "terrible",
    "worst",
    "hate",
    "awful",
    "poor",
    "disappointing",
    "horrible",
    "useless",
    "waste",
    "never",
    "refund",
];

/// Draws below this bump the rating up one star.
const NUDGE_UP_BELOW: f64 = 0.1;
/// Draws above this drop the rating one star.
const NUDGE_DOWN_ABOVE: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordTally {
    pub positive: usize,
    pub negative: usize,
}

/// Half-open confidence range `[low, low + width)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBand {
    pub low: f64,
    pub width: f64,
}

impl ConfidenceBand {
    const fn new(low: f64, width: f64) -> Self {
        Self { low, width }
    }

    pub fn high(&self) -> f64 {
        self.low + self.width
    }

    pub fn sample(&self, draw: f64) -> f64 {
        self.low + draw * self.width
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub rating: u8,
    pub label: SentimentLabel,
    pub band: ConfidenceBand,
}

/// Counts how many listed tokens occur anywhere in the text.
///
/// Containment is by substring, so "goodness" counts as "good" and each token
/// counts at most once regardless of repetitions.
pub fn tally(text: &str) -> KeywordTally {
    let lower = text.to_lowercase();
    let count = |words: &[&str]| words.iter().filter(|w| lower.contains(*w)).count();

    KeywordTally {
        positive: count(&POSITIVE_WORDS[..]),
        negative: count(&NEGATIVE_WORDS[..]),
    }
}

pub fn classify(tally: KeywordTally) -> Classification {
    let KeywordTally { positive, negative } = tally;

    if positive > negative * 2 {
        Classification {
            rating: 5,
            label: SentimentLabel::HighlyPositive,
            band: ConfidenceBand::new(85.0, 15.0),
        }
    } else if positive > negative {
        Classification {
            rating: 4,
            label: SentimentLabel::Positive,
            band: ConfidenceBand::new(75.0, 15.0),
        }
    } else if positive == negative {
        Classification {
            rating: 3,
            label: SentimentLabel::Neutral,
            band: ConfidenceBand::new(65.0, 15.0),
        }
    } else if negative > positive {
        Classification {
            rating: 2,
            label: SentimentLabel::Negative,
            band: ConfidenceBand::new(70.0, 15.0),
        }
    } else {
        Classification {
            rating: 1,
            label: SentimentLabel::HighlyNegative,
            band: ConfidenceBand::new(80.0, 15.0),
        }
    }
}

/// Nudges the rating by one star on the tails of `draw`. Label and confidence
/// are left alone, so they may disagree with the final rating.
pub fn perturb(rating: u8, draw: f64) -> u8 {
    if draw < NUDGE_UP_BELOW && rating < 5 {
        rating + 1
    } else if draw > NUDGE_DOWN_ABOVE && rating > 1 {
        rating - 1
    } else {
        rating
    }
}

/// Scores feedback locally. Consumes two draws: confidence, then perturbation.
pub fn score<R: RandomSource + ?Sized>(text: &str, rng: &mut R) -> PredictionResult {
    let counts = tally(text);
    let class = classify(counts);
    let confidence = class.band.sample(rng.next_unit());
    let rating = perturb(class.rating, rng.next_unit());

    tracing::debug!(
        positive = counts.positive,
        negative = counts.negative,
        base_rating = class.rating,
        rating,
        "Scored feedback with keyword heuristic"
    );

    PredictionResult {
        rating: f64::from(rating),
        confidence: round_half_up(confidence),
        sentiment: class.label.as_str().to_string(),
        source: PredictionSource::Heuristic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{RngSource, ScriptedSource};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BANDS: [(f64, f64); 5] = [
        (85.0, 100.0),
        (75.0, 90.0),
        (65.0, 80.0),
        (70.0, 85.0),
        (80.0, 95.0),
    ];

    #[test]
    fn test_tally_uses_substring_containment() {
        let counts = tally("The GOODNESS of it");
        assert_eq!(counts.positive, 1);
        assert_eq!(counts.negative, 0);

        // repeated tokens count once
        let counts = tally("good good good");
        assert_eq!(counts.positive, 1);
    }

    #[test]
    fn test_positive_only_text_scores_at_least_four() {
        for text in ["love", "good happy", "excellent perfect awesome recommend"] {
            let counts = tally(text);
            assert!(counts.positive >= 1);
            assert_eq!(counts.negative, 0);
            assert!(classify(counts).rating >= 4);
        }
    }

    #[test]
    fn test_text_without_tokens_is_neutral() {
        let counts = tally("The package arrived on a Tuesday afternoon");
        assert_eq!(counts, KeywordTally { positive: 0, negative: 0 });

        let class = classify(counts);
        assert_eq!(class.rating, 3);
        assert_eq!(class.label, SentimentLabel::Neutral);
        assert_eq!(class.band, ConfidenceBand::new(65.0, 15.0));
    }

    #[test]
    fn test_highly_positive_scenario() {
        let text = "This product is absolutely great and amazing, best purchase ever";
        let counts = tally(text);
        assert_eq!(counts, KeywordTally { positive: 3, negative: 0 });

        let mut rng = ScriptedSource::new(vec![0.5, 0.5]);
        let result = score(text, &mut rng);
        assert_eq!(result.rating, 5.0);
        assert_eq!(result.sentiment, "Highly Positive");
        assert!(classify(counts).band.contains(result.confidence));
        assert_eq!(result.source, PredictionSource::Heuristic);
    }

    #[test]
    fn test_negative_scenario_follows_comparison_order() {
        let text = "Terrible awful waste of money, worst purchase";
        let counts = tally(text);
        assert_eq!(counts, KeywordTally { positive: 0, negative: 4 });

        let mut rng = ScriptedSource::new(vec![0.0, 0.5]);
        let result = score(text, &mut rng);
        assert_eq!(result.rating, 2.0);
        assert_eq!(result.sentiment, "Negative");
        assert_eq!(result.confidence, 70.0);
    }

    #[test]
    fn test_mixed_text_is_positive_or_neutral() {
        // 2 positive vs 1 negative: not more than double, but still ahead
        let class = classify(tally("good and happy but bad"));
        assert_eq!(class.rating, 4);
        assert_eq!(class.label, SentimentLabel::Positive);

        let class = classify(tally("good but bad"));
        assert_eq!(class.rating, 3);
    }

    #[test]
    fn test_perturbation_branches() {
        assert_eq!(perturb(3, 0.05), 4);
        assert_eq!(perturb(5, 0.05), 5);
        assert_eq!(perturb(3, 0.95), 2);
        assert_eq!(perturb(1, 0.95), 1);
        assert_eq!(perturb(3, 0.1), 3);
        assert_eq!(perturb(3, 0.9), 3);
    }

    #[test]
    fn test_perturbation_keeps_label_and_confidence() {
        let text = "The package arrived on a Tuesday afternoon";

        let mut up = ScriptedSource::new(vec![0.0, 0.01]);
        let raised = score(text, &mut up);
        assert_eq!(raised.rating, 4.0);
        assert_eq!(raised.sentiment, "Neutral");
        assert_eq!(raised.confidence, 65.0);

        let mut down = ScriptedSource::new(vec![0.0, 0.99]);
        let lowered = score(text, &mut down);
        assert_eq!(lowered.rating, 2.0);
        assert_eq!(lowered.sentiment, "Neutral");
        assert_eq!(lowered.confidence, 65.0);
    }

    #[test]
    fn test_confidence_is_rounded() {
        // 85 + 0.5 * 15 = 92.5 rounds up
        let mut rng = ScriptedSource::new(vec![0.5, 0.5]);
        let result = score("great", &mut rng);
        assert_eq!(result.confidence, 93.0);

        // just below the band's upper edge
        let mut rng = ScriptedSource::new(vec![0.999, 0.5]);
        let result = score("great", &mut rng);
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_empty_and_long_input_do_not_fault() {
        let mut rng = ScriptedSource::new(vec![0.5]);
        let empty = score("", &mut rng);
        assert_eq!(empty.rating, 3.0);
        assert_eq!(empty.sentiment, "Neutral");

        let long = "refund never ".repeat(50_000);
        let result = score(&long, &mut rng);
        assert_eq!(result.rating, 2.0);
    }

    #[test]
    fn test_random_inputs_stay_in_bounds() {
        let mut rng = RngSource(StdRng::seed_from_u64(7));
        let samples = [
            "",
            "great",
            "terrible",
            "good bad",
            "love it, never again, refund please",
            "Ünïcödé feedback with no tokens at all",
        ];

        for _ in 0..200 {
            for text in samples {
                let result = score(text, &mut rng);
                assert!((1.0..=5.0).contains(&result.rating));
                assert_eq!(result.rating.fract(), 0.0);
                assert_eq!(result.confidence.fract(), 0.0);
                assert!(
                    BANDS
                        .iter()
                        .any(|(lo, hi)| result.confidence >= *lo && result.confidence <= *hi),
                    "confidence {} outside every band",
                    result.confidence
                );
            }
        }
    }
}
