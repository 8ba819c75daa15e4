//! Timing rules of the result modal, evaluated at an elapsed time.

use crate::domain::model::{BadgeVariant, PredictionResult};
use crate::utils::numeric::{format_number, round_half_up};
use std::time::Duration;

pub const STAR_COUNT: usize = 5;
pub const STAR_INTERVAL_MS: u64 = 150;
pub const COUNTER_DURATION_MS: u64 = 1000;
pub const CONFIDENCE_DELAY_MS: u64 = 500;
pub const COUNTER_TICK_MS: u64 = 16;

/// A number counting from `from` to `to` in 16 ms ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub start_ms: u64,
    pub from: f64,
    pub to: f64,
    pub duration_ms: u64,
}

impl CounterAnimation {
    pub fn new(start_ms: u64, to: f64) -> Self {
        Self {
            start_ms,
            from: 0.0,
            to,
            duration_ms: COUNTER_DURATION_MS,
        }
    }

    fn increment(&self) -> f64 {
        (self.to - self.from) / (self.duration_ms as f64 / COUNTER_TICK_MS as f64)
    }

    /// Raw counter value at `elapsed_ms` since the modal opened.
    pub fn value_at(&self, elapsed_ms: u64) -> f64 {
        if elapsed_ms < self.start_ms {
            return self.from;
        }

        let increment = self.increment();
        if increment == 0.0 || !increment.is_finite() {
            return self.to;
        }

        let ticks = (elapsed_ms - self.start_ms) / COUNTER_TICK_MS;
        let current = self.from + increment * ticks as f64;
        let reached =
            (increment > 0.0 && current >= self.to) || (increment < 0.0 && current <= self.to);
        if reached {
            self.to
        } else {
            current
        }
    }

    /// Counter text at `elapsed_ms`, rounded as displayed.
    pub fn text_at(&self, elapsed_ms: u64) -> String {
        format_number(round_half_up(self.value_at(elapsed_ms)))
    }

    /// First instant at which the counter shows its final value.
    pub fn end_ms(&self) -> u64 {
        let increment = self.increment();
        if increment == 0.0 || !increment.is_finite() {
            return self.start_ms;
        }
        let ticks = ((self.to - self.from) / increment).ceil().max(0.0) as u64;
        self.start_ms
            .saturating_add(ticks.saturating_mul(COUNTER_TICK_MS))
    }
}

/// Everything the modal animates for one result.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    /// Fill instant of each star cell; `None` stays empty.
    pub star_fills: [Option<u64>; STAR_COUNT],
    pub rating_counter: CounterAnimation,
    pub confidence_counter: CounterAnimation,
    /// Target bar width in percent.
    pub confidence_width: f64,
    pub badge: BadgeVariant,
}

/// Milliseconds for a possibly fractional, negative or non-finite delay.
/// Huge delays saturate at `u64::MAX`.
fn delay_ms(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    }
}

impl Schedule {
    pub fn for_result(result: &PredictionResult) -> Self {
        let mut star_fills = [None; STAR_COUNT];
        for (index, slot) in star_fills.iter_mut().enumerate() {
            if (index as f64) < result.rating {
                *slot = Some(index as u64 * STAR_INTERVAL_MS);
            }
        }

        Self {
            star_fills,
            rating_counter: CounterAnimation::new(
                delay_ms(result.rating * STAR_INTERVAL_MS as f64),
                result.rating,
            ),
            confidence_counter: CounterAnimation::new(CONFIDENCE_DELAY_MS, result.confidence),
            confidence_width: result.confidence,
            badge: BadgeVariant::for_rating(result.rating),
        }
    }

    pub fn stars_at(&self, elapsed_ms: u64) -> [bool; STAR_COUNT] {
        let mut filled = [false; STAR_COUNT];
        for (cell, fill) in filled.iter_mut().zip(self.star_fills.iter()) {
            *cell = matches!(fill, Some(at) if *at <= elapsed_ms);
        }
        filled
    }

    /// Bar width at `elapsed_ms`. The bar jumps to its target when the
    /// confidence delay passes; the transition itself is left to the surface.
    pub fn bar_width_at(&self, elapsed_ms: u64) -> f64 {
        if elapsed_ms < self.confidence_counter.start_ms {
            0.0
        } else {
            self.confidence_width
        }
    }

    pub fn frame_at(&self, elapsed_ms: u64) -> Frame {
        Frame {
            stars: self.stars_at(elapsed_ms),
            rating_text: self.rating_counter.text_at(elapsed_ms),
            confidence_text: format!("{}%", self.confidence_counter.text_at(elapsed_ms)),
            bar_width: self.bar_width_at(elapsed_ms),
        }
    }

    /// Time after which no frame changes any more.
    pub fn duration(&self) -> Duration {
        let last_star = self.star_fills.iter().flatten().max().copied().unwrap_or(0);
        let end = last_star
            .max(self.rating_counter.end_ms())
            .max(self.confidence_counter.end_ms());
        Duration::from_millis(end)
    }
}

/// Visible modal state at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub stars: [bool; STAR_COUNT],
    pub rating_text: String,
    pub confidence_text: String,
    pub bar_width: f64,
}

impl Frame {
    pub fn filled_stars(&self) -> usize {
        self.stars.iter().filter(|s| **s).count()
    }
}
