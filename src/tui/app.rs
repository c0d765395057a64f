//! Application state for the interactive session.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::actions::{determine_form_action, FormAction, FormActionContext};
use super::form::FormState;
use super::render;
use crate::export::write_workbook;
use crate::observability::{set_current_file, set_operation, set_session_entries, Operation};
use crate::session::Session;

/// Rows moved per PageUp / PageDown
const SCROLL_PAGE: usize = 5;

/// Kind of status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Interactive session state: the entries plus the form editing them
pub struct FormApp {
    session: Session,
    form: FormState,
    export_path: PathBuf,
    status: Option<StatusMessage>,
    help_visible: bool,
    entries_offset: usize,
}

impl FormApp {
    pub fn new(export_path: PathBuf) -> Self {
        Self::with_session(Session::new(), export_path)
    }

    pub fn with_session(session: Session, export_path: PathBuf) -> Self {
        Self {
            session,
            form: FormState::new(),
            export_path,
            status: None,
            help_visible: false,
            entries_offset: 0,
        }
    }

    /// Handle keyboard input, returning true when the session should end
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        let ctx = FormActionContext {
            focus: self.form.focus(),
            help_visible: self.help_visible,
        };
        match determine_form_action(key, ctx) {
            Some(action) => Ok(self.execute(action)),
            None => Ok(false),
        }
    }

    /// Execute an action (imperative shell), returning true on quit
    pub fn execute(&mut self, action: FormAction) -> bool {
        if !matches!(action, FormAction::InsertChar(_) | FormAction::DeleteChar) {
            self.status = None;
        }

        match action {
            FormAction::Quit => return true,
            FormAction::FocusNext => self.form.focus_next(),
            FormAction::FocusPrev => self.form.focus_prev(),
            FormAction::NextChoice => self.form.cycle_choice(true),
            FormAction::PrevChoice => self.form.cycle_choice(false),
            FormAction::InsertChar(c) => self.form.insert_char(c),
            FormAction::DeleteChar => self.form.delete_char(),
            FormAction::ClearField => self.form.clear_field(),
            FormAction::AddEntry => self.add_entry(),
            FormAction::Export => self.export(),
            FormAction::ScrollUp => {
                self.entries_offset = self.entries_offset.saturating_sub(SCROLL_PAGE);
            }
            FormAction::ScrollDown => {
                let last = self.session.len().saturating_sub(1);
                self.entries_offset = (self.entries_offset + SCROLL_PAGE).min(last);
            }
            FormAction::ToggleHelp => self.help_visible = !self.help_visible,
        }
        false
    }

    fn add_entry(&mut self) {
        let entry = self.form.to_entry();
        self.session.add_entry(
            entry.category,
            entry.indicator,
            entry.max_points,
            entry.achieved_points,
            entry.comment,
        );
        set_session_entries(self.session.len());
        self.status = Some(StatusMessage::success("✓ Indicator added successfully"));
    }

    fn export(&mut self) {
        if self.session.is_empty() {
            self.status = Some(StatusMessage::info(crate::scoring::EMPTY_PROMPT));
            return;
        }

        let _op = set_operation(Operation::Exporting);
        let _file = set_current_file(&self.export_path);
        match write_workbook(&self.export_path, self.session.entries(), &self.session.summary()) {
            Ok(()) => {
                info!("Session exported to {}", self.export_path.display());
                self.status = Some(StatusMessage::success(format!(
                    "✓ Exported results to {}",
                    self.export_path.display()
                )));
            }
            Err(e) => {
                warn!("Export failed: {}", e);
                self.status = Some(StatusMessage::error(format!("✗ Export failed: {}", e)));
            }
        }
    }

    /// Render the current view
    pub fn render(&self, frame: &mut Frame) {
        render::render(frame, self);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn entries_offset(&self) -> usize {
        self.entries_offset
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// End the session, handing back its entries
    pub fn into_session(self) -> Session {
        self.session
    }
}
