use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionSource {
    Remote,
    Heuristic,
}

/// One predict-and-display cycle's result.
///
/// Heuristic results always carry whole numbers; remote values are kept as
/// coerced, so `rating` may be fractional and `confidence` may exceed 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub rating: f64,
    pub confidence: f64,
    pub sentiment: String,
    pub source: PredictionSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    HighlyPositive,
    Positive,
    Neutral,
    Negative,
    HighlyNegative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::HighlyPositive => "Highly Positive",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::HighlyNegative => "Highly Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge look, chosen from the rating alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeVariant {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub border_color: &'static str,
    pub icon: &'static str,
}

impl BadgeVariant {
    pub fn for_rating(rating: f64) -> Self {
        if rating >= 4.0 {
            BadgeVariant::Positive
        } else if rating == 3.0 {
            BadgeVariant::Neutral
        } else {
            BadgeVariant::Negative
        }
    }

    pub fn style(&self) -> BadgeStyle {
        match self {
            BadgeVariant::Positive => BadgeStyle {
                background: "rgba(34, 197, 94, 0.2)",
                border_color: "#22c55e",
                icon: "fas fa-smile",
            },
            BadgeVariant::Neutral => BadgeStyle {
                background: "rgba(251, 191, 36, 0.2)",
                border_color: "#fbbf24",
                icon: "fas fa-meh",
            },
            BadgeVariant::Negative => BadgeStyle {
                background: "rgba(239, 68, 68, 0.2)",
                border_color: "#ef4444",
                icon: "fas fa-frown",
            },
        }
    }
}
