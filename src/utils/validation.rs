use crate::utils::error::{PredictorError, Result};
use url::Url;

/// Minimum trimmed feedback length, counted the way the browser counts it.
pub const MIN_FEEDBACK_LEN: usize = 10;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Length in UTF-16 code units, matching what a text box reports.
pub fn display_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Strips surrounding whitespace, including the byte order mark a text box
/// also drops.
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Trims the feedback and rejects it when empty or shorter than [`MIN_FEEDBACK_LEN`].
pub fn validate_feedback(text: &str) -> Result<&str> {
    let trimmed = trim_blank(text);
    if trimmed.is_empty() {
        return Err(PredictorError::EmptyFeedback);
    }

    let length = display_len(trimmed);
    if length < MIN_FEEDBACK_LEN {
        return Err(PredictorError::FeedbackTooShort {
            length,
            min: MIN_FEEDBACK_LEN,
        });
    }

    Ok(trimmed)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PredictorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PredictorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PredictorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PredictorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
