//! Pure action determination for form keyboard handling.
//!
//! `determine_form_action` maps key + context to an action without touching
//! any state; `app::FormApp::execute` performs the mutation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::form::FormField;

/// Actions that can be triggered from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Leave the session.
    Quit,

    /// Move focus to the next field.
    FocusNext,

    /// Move focus to the previous field.
    FocusPrev,

    /// Select the next option of a choice field.
    NextChoice,

    /// Select the previous option of a choice field.
    PrevChoice,

    /// Type a character into a text field.
    InsertChar(char),

    /// Delete the last character of a text field.
    DeleteChar,

    /// Empty the focused text field.
    ClearField,

    /// Append the form values as a new entry.
    AddEntry,

    /// Write the workbook.
    Export,

    /// Scroll the entries table.
    ScrollUp,
    ScrollDown,

    /// Show or hide the key reference.
    ToggleHelp,
}

/// State needed to decide what a key means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormActionContext {
    pub focus: FormField,
    pub help_visible: bool,
}

impl FormActionContext {
    pub fn new(focus: FormField) -> Self {
        Self {
            focus,
            help_visible: false,
        }
    }
}

/// Pure function: Determine which action a key triggers in the form.
///
/// # Returns
/// * `Some(action)` - The action to execute
/// * `None` - Key has no action in this context
pub fn determine_form_action(key: KeyEvent, ctx: FormActionContext) -> Option<FormAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Any key dismisses the help overlay
    if ctx.help_visible {
        return Some(FormAction::ToggleHelp);
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('c') => Some(FormAction::Quit),
            KeyCode::Char('a') => Some(FormAction::AddEntry),
            KeyCode::Char('s') => Some(FormAction::Export),
            KeyCode::Char('u') if ctx.focus.is_text() => Some(FormAction::ClearField),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(FormAction::Quit),

        // Focus movement - always available
        KeyCode::Tab | KeyCode::Down => Some(FormAction::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(FormAction::FocusPrev),

        KeyCode::PageUp => Some(FormAction::ScrollUp),
        KeyCode::PageDown => Some(FormAction::ScrollDown),

        KeyCode::Left if ctx.focus.is_choice() => Some(FormAction::PrevChoice),
        KeyCode::Right if ctx.focus.is_choice() => Some(FormAction::NextChoice),

        KeyCode::Enter | KeyCode::Char(' ') if ctx.focus == FormField::AddButton => {
            Some(FormAction::AddEntry)
        }
        KeyCode::Enter => Some(FormAction::FocusNext),

        // Text fields take every printable character, including 'q' and '?'
        KeyCode::Char(c) if ctx.focus.is_text() => Some(FormAction::InsertChar(c)),
        KeyCode::Backspace if ctx.focus.is_text() => Some(FormAction::DeleteChar),

        KeyCode::Char('q') => Some(FormAction::Quit),
        KeyCode::Char('?') => Some(FormAction::ToggleHelp),

        _ => None,
    }
}
