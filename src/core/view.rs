//! Rendering state handed to whatever surface draws the widget.

use crate::core::schedule::{Frame, Schedule};
use crate::domain::model::{BadgeStyle, PredictionResult};
use crate::utils::validation::display_len;
use std::time::Duration;

pub const TOAST_VISIBLE_FOR: Duration = Duration::from_millis(3000);

pub const PREDICT_LABEL: &str = "Predict Rating";
pub const BUSY_LABEL: &str = "Analyzing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCountTone {
    Muted,
    Highlight,
    Accent,
}

impl CharCountTone {
    pub fn for_length(length: usize) -> Self {
        if length > 500 {
            CharCountTone::Accent
        } else if length > 200 {
            CharCountTone::Highlight
        } else {
            CharCountTone::Muted
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            CharCountTone::Muted => "#8484a0",
            CharCountTone::Highlight => "#7209B7",
            CharCountTone::Accent => "#4CC9F0",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub busy: bool,
}

impl ButtonState {
    pub fn label(&self) -> &'static str {
        if self.busy {
            BUSY_LABEL
        } else {
            PREDICT_LABEL
        }
    }

    pub fn disabled(&self) -> bool {
        self.busy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Validation,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub visible_for: Duration,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            visible_for: TOAST_VISIBLE_FOR,
        }
    }
}

/// The open result modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub result: PredictionResult,
    pub schedule: Schedule,
    pub generation: u64,
}

impl ModalView {
    pub fn new(result: PredictionResult, generation: u64) -> Self {
        let schedule = Schedule::for_result(&result);
        Self {
            result,
            schedule,
            generation,
        }
    }

    pub fn sentiment_text(&self) -> &str {
        &self.result.sentiment
    }

    pub fn badge_style(&self) -> BadgeStyle {
        self.schedule.badge.style()
    }

    pub fn frame_at(&self, elapsed: Duration) -> Frame {
        let ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.schedule.frame_at(ms)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewModel {
    pub input: String,
    pub char_count: usize,
    pub button: ButtonState,
    pub toast: Option<Toast>,
    pub modal: Option<ModalView>,
}

impl ViewModel {
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.char_count = display_len(&self.input);
    }

    pub fn char_tone(&self) -> CharCountTone {
        CharCountTone::for_length(self.char_count)
    }

    pub fn modal_open(&self) -> bool {
        self.modal.is_some()
    }
}
