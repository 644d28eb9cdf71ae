//! Pure render function.
//!
//! Draws the sign-in card: header, tab bar, the single alert, the active
//! form, and the key hints. Reads state only.

use ballot_core::login::{Alert, AlertVariant, Tab};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};

use crate::features::form::render_form;
use crate::state::AppState;

const CARD_WIDTH: u16 = 64;
const HEADER_HEIGHT: u16 = 4;
const TABS_HEIGHT: u16 = 2;
const FOOTER_HEIGHT: u16 = 1;

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let width = CARD_WIDTH.min(area.width);
    let card = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);

    let alert_height = app
        .form
        .alert
        .as_ref()
        .map_or(0, |alert| alert_height(alert, width));

    let [header, tabs, alert, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(TABS_HEIGHT),
        Constraint::Length(alert_height),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(card);

    render_header(frame, header);
    render_tabs(app.form.active_tab, frame, tabs);
    if let Some(current) = &app.form.alert {
        render_alert(current, frame, alert);
    }
    render_form(app, frame, body.inner(Margin::new(1, 1)));
    render_footer(frame, footer);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(" Ballot ")
        .title_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD));
    let lines = vec![
        Line::from(Span::styled(
            "Blockchain Voting System",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Secure • Transparent • Trustworthy",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_tabs(active: Tab, frame: &mut Frame, area: Rect) {
    let titles = Tab::all()
        .iter()
        .enumerate()
        .map(|(idx, tab)| format!(" F{} {} ", idx + 1, tab.title()));
    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(tabs, area);
}

fn alert_style(variant: AlertVariant) -> (Color, &'static str) {
    match variant {
        AlertVariant::Success => (Color::Green, "✓"),
        AlertVariant::Warning => (Color::Yellow, "!"),
        AlertVariant::Danger => (Color::Red, "✗"),
    }
}

fn alert_height(alert: &Alert, width: u16) -> u16 {
    let text_width = usize::from(width.saturating_sub(4)).max(1);
    let len = alert.message.chars().count() + 2;
    let rows = len.div_ceil(text_width);
    u16::try_from(rows).unwrap_or(1) + 2
}

fn render_alert(alert: &Alert, frame: &mut Frame, area: Rect) {
    let (color, icon) = alert_style(alert.variant);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let line = Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(color)),
        Span::styled(alert.message.clone(), Style::default().fg(color)),
    ]);
    frame.render_widget(
        Paragraph::new(line).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = "Enter submit · Tab next field · F1-F3 switch · Ctrl+P show password · Esc quit";
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ballot_core::auth::StaticAdminDirectory;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn app() -> AppState {
        AppState::new(Arc::new(StaticAdminDirectory::default()))
    }

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_login_view_shows_header_tabs_and_link() {
        let screen = draw(&app());
        assert!(screen.contains("Blockchain Voting System"));
        assert!(screen.contains("Secure • Transparent • Trustworthy"));
        assert!(screen.contains("F1 Login"));
        assert!(screen.contains("F3 Admin"));
        assert!(screen.contains("Enter your voter ID"));
        assert!(screen.contains("Register here"));
    }

    #[test]
    fn test_loading_button_label() {
        let mut app = app();
        app.form.loading = true;
        assert!(draw(&app).contains("Verifying..."));

        app.select_tab(Tab::Register);
        app.form.loading = true;
        assert!(draw(&app).contains("Registering..."));
    }

    #[test]
    fn test_alert_is_rendered() {
        let mut app = app();
        app.form.alert = Some(Alert::danger("Voter ID not found. Please register first."));
        assert!(draw(&app).contains("Voter ID not found."));
    }

    #[test]
    fn test_admin_password_is_masked_until_toggled() {
        let mut app = app();
        app.select_tab(Tab::Admin);
        app.admin_hint = Some("Username: admin | Password: admin123".into());
        app.form.admin.password = "s3cret".into();

        let screen = draw(&app);
        assert!(!screen.contains("s3cret"));
        assert!(screen.contains("••••••"));
        assert!(screen.contains("Admin Account:"));

        app.show_password = true;
        assert!(draw(&app).contains("s3cret"));
    }

    #[test]
    fn test_narrow_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        let mut app = app();
        app.select_tab(Tab::Register);
        app.form.alert = Some(Alert::success("Registration submitted successfully!"));
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }
}
