//! Terminal surface for the result modal.

use crate::core::schedule::{Frame, STAR_COUNT};
use crate::core::view::{ModalView, Toast, ToastKind};
use crate::domain::model::BadgeVariant;
use std::io::{self, Write};
use std::time::Duration;

const BAR_CELLS: usize = 20;

pub struct TerminalView<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Redraws the modal line in place.
    pub fn draw(&mut self, modal: &ModalView, frame: &Frame) -> io::Result<()> {
        let line = format_frame(modal, frame, self.color);
        write!(self.out, "\r\x1b[2K{}", line)?;
        self.out.flush()
    }

    /// Plays the modal schedule in real time, ending on the final frame.
    pub async fn play(&mut self, modal: &ModalView, frame_interval: Duration) -> io::Result<()> {
        let total = modal.schedule.duration();
        let started = tokio::time::Instant::now();
        let mut ticker = tokio::time::interval(frame_interval);

        loop {
            ticker.tick().await;
            let elapsed = started.elapsed();
            self.draw(modal, &modal.frame_at(elapsed))?;
            if elapsed >= total {
                break;
            }
        }

        writeln!(self.out)?;
        self.out.flush()
    }

    /// Prints only the settled modal.
    pub fn show_final(&mut self, modal: &ModalView) -> io::Result<()> {
        let frame = modal.frame_at(modal.schedule.duration());
        writeln!(self.out, "{}", format_frame(modal, &frame, self.color))?;
        self.out.flush()
    }

    pub fn toast(&mut self, toast: &Toast) -> io::Result<()> {
        writeln!(self.out, "{}", format_toast(toast))?;
        self.out.flush()
    }
}

pub fn format_toast(toast: &Toast) -> String {
    let icon = match toast.kind {
        ToastKind::Validation => "⚠",
        ToastKind::Fallback => "ℹ",
    };
    format!("{} {}", icon, toast.message)
}

pub fn format_frame(modal: &ModalView, frame: &Frame, color: bool) -> String {
    let stars: String = frame
        .stars
        .iter()
        .map(|filled| if *filled { '★' } else { '☆' })
        .collect();
    debug_assert_eq!(stars.chars().count(), STAR_COUNT);

    let width = frame.bar_width.clamp(0.0, 100.0);
    let filled = ((width / 100.0) * BAR_CELLS as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled));

    let icon = match modal.schedule.badge {
        BadgeVariant::Positive => "😊",
        BadgeVariant::Neutral => "😐",
        BadgeVariant::Negative => "☹",
    };
    let badge = format!("{} {}", icon, modal.sentiment_text());
    let badge = if color {
        paint(&badge, modal.badge_style().border_color)
    } else {
        badge
    };

    format!(
        "{} {:>3}  Confidence [{}] {:>4}  {}",
        stars, frame.rating_text, bar, frame.confidence_text, badge
    )
}

/// Wraps text in a 24-bit foreground color given as `#rrggbb`.
fn paint(text: &str, hex: &str) -> String {
    let digits = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text),
        _ => text.to_string(),
    }
}
