//! Session view rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::app::FormApp;
use super::form::FormField;
use super::theme::Theme;
use crate::output::terminal::{format_number, format_total};
use crate::scoring::{OverallResult, Summary, EMPTY_PROMPT};

const SIDE_PANEL_WIDTH: u16 = 46;

/// Render the whole session screen
pub fn render(frame: &mut Frame, app: &FormApp) {
    let theme = Theme::default();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDE_PANEL_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    render_form(frame, app, columns[0], &theme);
    render_results(frame, app, columns[1], &theme);
    render_footer(frame, app, rows[1], &theme);

    if app.help_visible() {
        render_help_overlay(frame, &theme);
    }
}

fn render_form(frame: &mut Frame, app: &FormApp, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New indicator ")
        .border_style(theme.hint_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FormField::ALL.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let form = app.form();
    for (field, chunk) in FormField::ALL.iter().zip(chunks.iter()) {
        let focused = form.focus() == *field;
        if *field == FormField::AddButton {
            let button = Paragraph::new(format!("[ {} ]", field.label()))
                .alignment(Alignment::Center)
                .style(theme.button_style(focused))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.field_border_style(focused)),
                );
            frame.render_widget(button, *chunk);
            continue;
        }

        let width = chunk.width.saturating_sub(2) as usize;
        let value = field_text(form.value(*field), *field, focused, width);
        let widget = Paragraph::new(Span::styled(value, theme.value_style(focused))).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", field.label()))
                .border_style(theme.field_border_style(focused)),
        );
        frame.render_widget(widget, *chunk);
    }

    if let Some(hint_area) = chunks.last() {
        let indicator = form.indicator();
        let hint = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Reference: {}", indicator.reference_threshold),
                theme.hint_style(),
            )),
            Line::from(Span::styled(
                format!("Suggested max points: {}", format_number(indicator.max_points)),
                theme.hint_style(),
            )),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(hint, *hint_area);
    }
}

/// Decorate a field value for display: arrows on choices, a cursor on text
fn field_text(value: &str, field: FormField, focused: bool, width: usize) -> String {
    if field.is_choice() {
        let text = if focused {
            format!("◂ {} ▸", value)
        } else {
            value.to_string()
        };
        return fit_head(&text, width);
    }
    if focused {
        // Keep the end visible while typing
        let tail = fit_tail(value, width.saturating_sub(1));
        format!("{}▏", tail)
    } else {
        fit_head(value, width)
    }
}

/// Longest prefix that fits in `width` columns
fn fit_head(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Longest suffix that fits in `width` columns
fn fit_tail(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut chars = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        chars.push(c);
    }
    chars.into_iter().rev().collect()
}

fn render_results(frame: &mut Frame, app: &FormApp, area: Rect, theme: &Theme) {
    let session = app.session();
    let summary = session.summary();

    let chunks = match session.overall() {
        Some(result) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(5),
                    Constraint::Length(summary.len() as u16 + 3),
                    Constraint::Length(4),
                ])
                .split(area);
            render_summary(frame, &summary, chunks[1], theme);
            render_result(frame, &result, chunks[2], theme);
            chunks
        }
        None => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(5), Constraint::Length(3)])
                .split(area);
            let prompt = Paragraph::new(Span::styled(
                format!("ℹ {}", EMPTY_PROMPT),
                theme.status_style(super::app::StatusKind::Info),
            ))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.hint_style()),
            );
            frame.render_widget(prompt, chunks[1]);
            chunks
        }
    };

    render_entries(frame, app, chunks[0], theme);
}

fn render_entries(frame: &mut Frame, app: &FormApp, area: Rect, theme: &Theme) {
    let entries = app.session().entries();
    let rows: Vec<Row> = entries
        .iter()
        .enumerate()
        .skip(app.entries_offset())
        .map(|(idx, entry)| {
            Row::new(vec![
                Cell::from((idx + 1).to_string()),
                Cell::from(entry.category.key()),
                Cell::from(entry.indicator.clone()),
                Cell::from(entry.max_points.to_string()),
                Cell::from(entry.achieved_points.to_string()),
                Cell::from(entry.comment.clone()),
            ])
        })
        .collect();

    let header = Row::new(vec!["#", "Category", "Indicator", "Max", "Achieved", "Comments"])
        .style(theme.header_style());
    let widths = [
        Constraint::Length(4),
        Constraint::Length(9),
        Constraint::Percentage(35),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Indicators ({}) ", entries.len()))
            .border_style(theme.hint_style()),
    );
    frame.render_widget(table, area);
}

fn render_summary(frame: &mut Frame, summary: &Summary, area: Rect, theme: &Theme) {
    let rows: Vec<Row> = summary
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.category.label()),
                Cell::from(format_number(row.sum_max_points)),
                Cell::from(format_number(row.sum_achieved_points)),
                Cell::from(format_number(row.percent_achieved)),
                Cell::from(format_number(row.weight)),
                Cell::from(format_number(row.contribution)),
            ])
        })
        .collect();

    let header = Row::new(vec!["Category", "Max", "Achieved", "%", "Weight", "Contribution"])
        .style(theme.header_style());
    let widths = [
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(13),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Results by Category ")
            .border_style(theme.hint_style()),
    );
    frame.render_widget(table, area);
}

fn render_result(frame: &mut Frame, result: &OverallResult, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Final score (%): ", theme.hint_style()),
            Span::styled(format_total(result.total), theme.metric_style()),
        ]),
        Line::from(vec![
            Span::styled("Level:           ", theme.hint_style()),
            Span::styled(result.grade.label(), theme.grade_style(result.grade)),
        ]),
    ];
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Overall ")
            .border_style(theme.hint_style()),
    );
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, app: &FormApp, area: Rect, theme: &Theme) {
    let line = match app.status() {
        Some(status) => Line::from(Span::styled(
            status.text.clone(),
            theme.status_style(status.kind),
        )),
        None => Line::from(Span::styled(
            "Tab/↑↓ move  ←/→ choose  Ctrl+A add  Ctrl+S export  ? help  Esc quit",
            theme.hint_style(),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_overlay(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 16, frame.area());
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", k), theme.header_style()),
            Span::raw(desc),
        ])
    };
    let lines = vec![
        Line::from(""),
        key("Tab / ↓", "Next field"),
        key("Shift+Tab / ↑", "Previous field"),
        key("← / →", "Change category or indicator"),
        key("Enter", "Add (on the button) or next field"),
        key("Ctrl+A", "Add to table"),
        key("Ctrl+S", "Export to Excel"),
        key("Ctrl+U", "Clear the field"),
        key("PgUp / PgDn", "Scroll indicators"),
        key("Esc / q", "Quit"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", theme.hint_style())),
    ];
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keys ")
            .border_style(theme.field_border_style(true)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
