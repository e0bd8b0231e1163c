use crate::result::QuizResult;
use crate::ui::layout::calculate_result_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn verdict(result: &QuizResult) -> (&'static str, Color) {
    let pct = result.percentage();
    if pct >= 80.0 {
        ("Excellent!", Color::Green)
    } else if pct >= 50.0 {
        ("Not bad!", Color::Yellow)
    } else {
        ("Better luck next time.", Color::Red)
    }
}

pub fn draw_summary(f: &mut Frame, result: Option<&QuizResult>) {
    let layout = calculate_result_chunks(f.area());

    let title = Paragraph::new("Quiz Result")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    match result {
        Some(result) => {
            let (message, color) = verdict(result);
            text.push_line(Line::from(Span::styled(
                format!("Your score: {}", result),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(format!("{:.0}%", result.percentage())));
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                message,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        }
        None => {
            text.push_line(Line::from("No result to show."));
        }
    }

    let content = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, layout.content_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Play Again  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" New Quiz  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
