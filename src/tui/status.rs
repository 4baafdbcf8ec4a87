//! Transient status messages shown on the bottom row.
//!
//! Each message carries its own deadline. A newer message replaces the older
//! one together with its deadline, so a stale expiry can never clear a message
//! that superseded it.

use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::tui::colors::{CRIMSON, GOLD, LIME};

/// How long a status message stays visible by default.
pub const STATUS_DURATION: Duration = Duration::from_secs(5);

/// Severity of a status message; picks the colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    fn color(self) -> Color {
        match self {
            StatusKind::Info => GOLD,
            StatusKind::Success => LIME,
            StatusKind::Error => CRIMSON,
        }
    }
}

#[derive(Clone, Debug)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    expires_at: Instant,
}

/// Bottom-row message surface.
#[derive(Debug, Default)]
pub struct StatusBar {
    current: Option<StatusMessage>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text` for `duration`, replacing any message currently shown.
    pub fn show_for(&mut self, text: impl Into<String>, kind: StatusKind, duration: Duration) {
        self.show_at(text, kind, duration, Instant::now());
    }

    pub(crate) fn show_at(
        &mut self,
        text: impl Into<String>,
        kind: StatusKind,
        duration: Duration,
        now: Instant,
    ) {
        self.current = Some(StatusMessage {
            text: text.into(),
            kind,
            expires_at: now + duration,
        });
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.show_for(text, StatusKind::Info, STATUS_DURATION);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.show_for(text, StatusKind::Success, STATUS_DURATION);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show_for(text, StatusKind::Error, STATUS_DURATION);
    }

    /// Clear the current message once its own deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|m| now >= m.expires_at) {
            self.current = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.text.as_str())
    }

    pub fn kind(&self) -> Option<StatusKind> {
        self.current.as_ref().map(|m| m.kind)
    }

    /// Draw the current message, or `fallback` when nothing is shown.
    pub fn render(&self, f: &mut Frame, area: Rect, fallback: &str) {
        let widget = match &self.current {
            Some(m) => Paragraph::new(m.text.as_str()).style(Style::default().fg(m.kind.color())),
            None => Paragraph::new(fallback).style(Style::default().fg(Color::DarkGray)),
        };
        f.render_widget(widget, area);
    }
}
