//! Form view: the active tab's fields, submit button, and trailing links.

use ballot_core::login::Tab;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::Field;
use crate::common::{mask, truncate_start_with_ellipsis};
use crate::state::AppState;

const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
const SPINNER_SPEED_DIVISOR: usize = 2;
const INPUT_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;

/// Renders the active tab's form into `area`.
pub fn render_form(app: &AppState, frame: &mut Frame, area: Rect) {
    let tab = app.form.active_tab;
    let focused = app.focused_field();
    let bottom = area.y + area.height;
    let mut y = area.y;

    for &field in Field::for_tab(tab) {
        let needed = field_height(app, field);
        if y + needed > bottom {
            return;
        }
        render_field(app, frame, Rect::new(area.x, y, area.width, needed), field, field == focused);
        y += needed + 1;
    }

    if y + BUTTON_HEIGHT > bottom {
        return;
    }
    render_button(app, frame, Rect::new(area.x, y, area.width, BUTTON_HEIGHT));
    y += BUTTON_HEIGHT + 1;

    let trailer = trailer_lines(app);
    let height = (trailer.len() as u16).min(bottom.saturating_sub(y));
    if height > 0 {
        frame.render_widget(
            Paragraph::new(trailer).alignment(Alignment::Center),
            Rect::new(area.x, y, area.width, height),
        );
    }
}

fn field_hint(app: &AppState, field: Field) -> Option<&str> {
    app.field_hint
        .as_ref()
        .filter(|hint| hint.field == field)
        .map(|hint| hint.message.as_str())
}

fn field_height(app: &AppState, field: Field) -> u16 {
    let extra = u16::from(field.help().is_some()) + u16::from(field_hint(app, field).is_some());
    1 + INPUT_HEIGHT + extra
}

fn render_field(app: &AppState, frame: &mut Frame, area: Rect, field: Field, focused: bool) {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(field.label(), label_style))),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let disabled = app.form.loading && app.form.active_tab == Tab::Login;
    let border_color = if focused && !disabled {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let input_area = Rect::new(area.x, area.y + 1, area.width, INPUT_HEIGHT);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(input_area);
    frame.render_widget(block, input_area);

    let raw = field.value(&app.form);
    let shown = if field.is_secret() && !app.show_password {
        mask(raw)
    } else {
        raw.to_string()
    };
    let max_width = usize::from(inner.width.saturating_sub(1));
    let text = if shown.is_empty() {
        Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(truncate_start_with_ellipsis(&shown, max_width))
    };
    frame.render_widget(Paragraph::new(Line::from(text)), inner);

    if focused && !disabled {
        let visible = truncate_start_with_ellipsis(&shown, max_width);
        let offset = u16::try_from(visible.width()).unwrap_or(inner.width);
        frame.set_cursor_position((inner.x + offset.min(inner.width), inner.y));
    }

    let mut y = input_area.y + INPUT_HEIGHT;
    if let Some(help) = field.help() {
        frame.render_widget(
            Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray))),
            Rect::new(area.x, y, area.width, 1),
        );
        y += 1;
    }
    if let Some(hint) = field_hint(app, field) {
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::Yellow))),
            Rect::new(area.x, y, area.width, 1),
        );
    }
}

fn button_label(app: &AppState) -> String {
    let tab = app.form.active_tab;
    if app.form.loading && tab != Tab::Admin {
        let spinner =
            SPINNER_FRAMES[(app.spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len()];
        let busy = if tab == Tab::Login {
            "Verifying..."
        } else {
            "Registering..."
        };
        return format!("{spinner} {busy}");
    }
    match tab {
        Tab::Login => "Login".to_string(),
        Tab::Register => "Register".to_string(),
        Tab::Admin => "Admin Login".to_string(),
    }
}

fn render_button(app: &AppState, frame: &mut Frame, area: Rect) {
    let busy = app.form.loading && app.form.active_tab != Tab::Admin;
    let color = if busy { Color::DarkGray } else { Color::Green };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let label = Paragraph::new(Span::styled(
        button_label(app),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(label, area);
}

fn trailer_lines(app: &AppState) -> Vec<Line<'static>> {
    let muted = Style::default().fg(Color::DarkGray);
    let link = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED);
    match app.form.active_tab {
        Tab::Login => vec![Line::from(vec![
            Span::styled("Don't have an account? ", muted),
            Span::styled("Register here", link),
            Span::styled(" (Ctrl+R)", muted),
        ])],
        Tab::Register => vec![Line::from(vec![
            Span::styled("Already have an account? ", muted),
            Span::styled("Login here", link),
            Span::styled(" (Ctrl+L)", muted),
        ])],
        Tab::Admin => match &app.admin_hint {
            Some(hint) => vec![
                Line::from(Span::styled("Admin Account:", muted)),
                Line::from(Span::styled(hint.clone(), muted)),
            ],
            None => Vec::new(),
        },
    }
}
