//! Color theme and styling for the interactive session.

use ratatui::style::{Color, Modifier, Style};

use crate::scoring::Grade;
use crate::tui::app::StatusKind;

/// Minimal color scheme for the ecoscore TUI
pub struct Theme {
    /// Primary accent color (cyan for the focused field)
    pub primary: Color,
    /// Success color (green for confirmations)
    pub success: Color,
    /// Muted color (dark gray for borders and hints)
    pub muted: Color,
    /// Text color (white for values)
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    /// Warning color (yellow for errors and prompts)
    pub fn warning(&self) -> Color {
        Color::Yellow
    }

    /// Border style of a form field
    pub fn field_border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn value_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    /// Style for the add button
    pub fn button_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Color::Black)
                .bg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.primary)
        }
    }

    /// Style for table headers
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for labels and key hints
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn metric_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Style for the grade, from green (A) to red (E)
    pub fn grade_style(&self, grade: Grade) -> Style {
        let color = match grade {
            Grade::A => Color::Green,
            Grade::B => Color::LightGreen,
            Grade::C => Color::Yellow,
            Grade::D => Color::LightRed,
            Grade::E => Color::Red,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn status_style(&self, kind: StatusKind) -> Style {
        match kind {
            StatusKind::Success => Style::default().fg(self.success),
            StatusKind::Info => Style::default().fg(self.primary),
            StatusKind::Error => Style::default().fg(self.warning()),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
