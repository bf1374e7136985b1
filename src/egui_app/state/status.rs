use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Maximum number of entries kept in the status log.
const MAX_STATUS_LOG: usize = 50;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    /// Rolling status log entries, oldest first.
    pub log: Vec<String>,
}

impl StatusBarState {
    /// Status shown before anything has happened.
    pub fn idle() -> Self {
        Self {
            text: "Enter meteorological values to estimate the Fire Weather Index".into(),
            badge_label: style::status_badge_label(StatusTone::Idle).into(),
            badge_color: style::status_badge_color(StatusTone::Idle),
            log: Vec::new(),
        }
    }

    /// Replace the current message and append it to the log.
    pub fn set(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.text = text.into();
        self.badge_label = style::status_badge_label(tone).into();
        self.badge_color = style::status_badge_color(tone);
        self.log.push(self.text.clone());
        if self.log.len() > MAX_STATUS_LOG {
            let overflow = self.log.len() - MAX_STATUS_LOG;
            self.log.drain(..overflow);
        }
    }

    /// Concatenate log entries into a single displayable string.
    pub fn log_text(&self) -> String {
        if self.log.is_empty() {
            return String::new();
        }
        self.log.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_updates_badge_and_bounds_log() {
        let mut status = StatusBarState::idle();
        for idx in 0..(MAX_STATUS_LOG + 5) {
            status.set(format!("message {idx}"), StatusTone::Info);
        }
        assert_eq!(status.badge_label, "Info");
        assert_eq!(status.log.len(), MAX_STATUS_LOG);
        assert_eq!(status.log.first().map(String::as_str), Some("message 5"));
        assert!(status.log_text().ends_with(&format!("message {}", MAX_STATUS_LOG + 4)));
    }
}
