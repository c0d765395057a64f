//! Side-panel entry form state.

use crate::catalog::{self, Category, IndicatorDefinition};
use crate::entry::{Entry, EntryDraft, PointsValue};
use crate::output::terminal::format_number;

/// Focusable fields of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Category,
    Indicator,
    MaxPoints,
    AchievedPoints,
    Comment,
    AddButton,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Category,
        FormField::Indicator,
        FormField::MaxPoints,
        FormField::AchievedPoints,
        FormField::Comment,
        FormField::AddButton,
    ];

    /// Fields that take typed text
    pub fn is_text(self) -> bool {
        matches!(
            self,
            FormField::MaxPoints | FormField::AchievedPoints | FormField::Comment
        )
    }

    /// Fields that cycle through fixed options
    pub fn is_choice(self) -> bool {
        matches!(self, FormField::Category | FormField::Indicator)
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Category => "Category",
            FormField::Indicator => "Indicator",
            FormField::MaxPoints => "Max points",
            FormField::AchievedPoints => "Achieved points",
            FormField::Comment => "Comments",
            FormField::AddButton => "Add to table",
        }
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Current values of the form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    category: Category,
    indicator_index: usize,
    max_points: String,
    achieved_points: String,
    comment: String,
    focus: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        let mut form = Self {
            category: Category::ALL[0],
            indicator_index: 0,
            max_points: String::new(),
            achieved_points: String::new(),
            comment: String::new(),
            focus: FormField::Category,
        };
        form.reset_defaults();
        form
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn indicator(&self) -> &'static IndicatorDefinition {
        let indicators = catalog::indicators(self.category);
        &indicators[self.indicator_index.min(indicators.len() - 1)]
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FormField) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Text currently shown in a field
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Category => self.category.label(),
            FormField::Indicator => self.indicator().name,
            FormField::MaxPoints => &self.max_points,
            FormField::AchievedPoints => &self.achieved_points,
            FormField::Comment => &self.comment,
            FormField::AddButton => FormField::AddButton.label(),
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::MaxPoints => Some(&mut self.max_points),
            FormField::AchievedPoints => Some(&mut self.achieved_points),
            FormField::Comment => Some(&mut self.comment),
            _ => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.text_mut(self.focus) {
            text.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(text) = self.text_mut(self.focus) {
            text.pop();
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(text) = self.text_mut(self.focus) {
            text.clear();
        }
    }

    /// Switch category; the indicator goes back to the category's first one
    pub fn select_category(&mut self, category: Category) {
        if category != self.category {
            self.category = category;
            self.indicator_index = 0;
            self.reset_defaults();
        }
    }

    pub fn select_indicator(&mut self, index: usize) {
        let count = catalog::indicators(self.category).len();
        let index = index % count;
        if index != self.indicator_index {
            self.indicator_index = index;
            self.reset_defaults();
        }
    }

    /// Move the focused choice field to its next or previous option
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.focus {
            FormField::Category => {
                let next = if forward {
                    self.category.next()
                } else {
                    self.category.prev()
                };
                self.select_category(next);
            }
            FormField::Indicator => {
                let count = catalog::indicators(self.category).len();
                let index = if forward {
                    self.indicator_index + 1
                } else {
                    self.indicator_index + count - 1
                };
                self.select_indicator(index);
            }
            _ => {}
        }
    }

    /// Numeric and comment defaults of the selected indicator
    pub fn reset_defaults(&mut self) {
        let draft = EntryDraft::from_definition(self.indicator());
        self.max_points = format_number(draft.max_points);
        self.achieved_points = format_number(draft.achieved_points);
        self.comment = draft.comment;
    }

    /// Entry built from the form exactly as typed
    pub fn to_entry(&self) -> Entry {
        Entry::new(
            self.category,
            self.indicator().name,
            PointsValue::from_input(&self.max_points),
            PointsValue::from_input(&self.achieved_points),
            self.comment.clone(),
        )
    }
}
