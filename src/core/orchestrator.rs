//! Predict-and-display cycle driving the [`ViewModel`].
//!
//! A cycle moves `Idle -> Validating -> Requesting -> Displaying -> Idle`.
//! Each accepted predict gets a generation number; only the latest
//! generation may replace what the modal shows, so a slow, superseded
//! response never overwrites a newer one. The busy button state is tied to
//! the number of requests still in flight rather than to a single cycle.

use crate::core::heuristic;
use crate::core::view::{ModalView, Toast, ToastKind, ViewModel};
use crate::domain::model::PredictionResult;
use crate::domain::ports::{Predictor, RandomSource};
use crate::utils::error::Result;
use crate::utils::validation::validate_feedback;

pub const FALLBACK_NOTICE: &str = "Backend unavailable — showing demo result.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationState {
    Idle,
    Validating,
    Requesting,
    Displaying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

/// Where a click on the modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed surface around the dialog.
    Backdrop,
    /// Anything inside the dialog.
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn with_ctrl(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: true,
            meta: false,
        }
    }
}

/// What the caller should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Predict,
    Closed,
    Ignored,
}

/// Accepted predict request, handed back to [`Orchestrator::complete`].
#[derive(Debug)]
pub struct PredictTicket {
    generation: u64,
    feedback: String,
}

impl PredictTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Displayed(PredictionResult),
    /// A newer predict was started; this outcome was dropped.
    Superseded { generation: u64 },
}

pub struct Orchestrator<P: Predictor, R: RandomSource> {
    predictor: P,
    rng: R,
    state: PresentationState,
    view: ViewModel,
    generation: u64,
    in_flight: usize,
}

impl<P: Predictor, R: RandomSource> Orchestrator<P, R> {
    pub fn new(predictor: P, rng: R) -> Self {
        Self {
            predictor,
            rng,
            state: PresentationState::Idle,
            view: ViewModel::default(),
            generation: 0,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> PresentationState {
        self.state
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.view.set_input(text);
    }

    pub fn dismiss_toast(&mut self) {
        self.view.toast = None;
    }

    /// Validates the current input and, when accepted, enters the busy state.
    pub fn begin_predict(&mut self) -> Result<PredictTicket> {
        let previous = self.state;
        self.transition(PresentationState::Validating);

        let feedback = match validate_feedback(&self.view.input) {
            Ok(feedback) => feedback.to_string(),
            Err(e) => {
                tracing::info!("Rejected feedback: {}", e);
                self.view.toast = Some(Toast::new(ToastKind::Validation, e.to_string()));
                self.transition(previous);
                return Err(e);
            }
        };

        self.generation += 1;
        self.in_flight += 1;
        self.view.button.busy = true;
        self.transition(PresentationState::Requesting);

        Ok(PredictTicket {
            generation: self.generation,
            feedback,
        })
    }

    /// Finishes a request. Errors fall back to the keyword heuristic.
    pub fn complete(
        &mut self,
        ticket: PredictTicket,
        outcome: Result<PredictionResult>,
    ) -> Completion {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.view.button.busy = self.in_flight > 0;

        if ticket.generation != self.generation {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.generation,
                "Dropping superseded prediction"
            );
            return Completion::Superseded {
                generation: ticket.generation,
            };
        }

        let result = match outcome {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Prediction failed, using demo heuristic: {}", e);
                self.view.toast = Some(Toast::new(ToastKind::Fallback, FALLBACK_NOTICE));
                heuristic::score(&ticket.feedback, &mut self.rng)
            }
        };

        tracing::info!(
            rating = result.rating,
            confidence = result.confidence,
            sentiment = %result.sentiment,
            source = ?result.source,
            "Displaying prediction"
        );

        self.view.modal = Some(ModalView::new(result.clone(), ticket.generation));
        self.transition(PresentationState::Displaying);
        Completion::Displayed(result)
    }

    /// Runs one full cycle against the configured predictor.
    pub async fn predict(&mut self) -> Result<Completion> {
        let ticket = self.begin_predict()?;
        let outcome = self.predictor.predict(ticket.feedback()).await;
        Ok(self.complete(ticket, outcome))
    }

    /// Closes the modal. Returns false when nothing was open.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if self.view.modal.take().is_none() {
            return false;
        }
        tracing::debug!(?trigger, "Closed result modal");

        let next = if self.in_flight > 0 {
            PresentationState::Requesting
        } else {
            PresentationState::Idle
        };
        self.transition(next);
        true
    }

    pub fn click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop => self.close(CloseTrigger::Backdrop),
            ClickTarget::Content => false,
        }
    }

    pub fn handle_key(&mut self, key: &KeyPress) -> KeyAction {
        match key.key.as_str() {
            "Escape" if self.view.modal_open() => {
                self.close(CloseTrigger::Escape);
                KeyAction::Closed
            }
            "Enter" if key.ctrl || key.meta => KeyAction::Predict,
            _ => KeyAction::Ignored,
        }
    }

    fn transition(&mut self, next: PresentationState) {
        if self.state != next {
            tracing::trace!(from = ?self.state, to = ?next, "Presentation state change");
            self.state = next;
        }
    }
}
