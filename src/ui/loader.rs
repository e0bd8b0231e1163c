use crate::ui::layout::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn draw_loader(f: &mut Frame, tick: usize) {
    draw_spinner(f, tick, "Loading questions...", "Esc to cancel");
}

/// Shown while the final score is handed to the result screen.
pub fn draw_result_loader(f: &mut Frame, tick: usize) {
    draw_spinner(f, tick, "Loading results...", "");
}

fn draw_spinner(f: &mut Frame, tick: usize, label: &str, hint: &str) {
    let area = centered_rect(40, 5, f.area());
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {}", SPINNER[tick % SPINNER.len()], label),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let loader = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(Clear, area);
    f.render_widget(loader, area);
}

pub fn draw_failure(f: &mut Frame, message: &str) {
    let area = centered_rect(60, 9, f.area());
    let lines = vec![
        Line::from(Span::styled(
            "Could not load questions",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "r",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Retry  "),
            Span::styled(
                "Enter/Esc",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Back to Form"),
        ]),
    ];

    let failure = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Error"));
    f.render_widget(Clear, area);
    f.render_widget(failure, area);
}
