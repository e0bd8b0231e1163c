use crate::session::{Phase, QuizSession};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::truncate_string;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_quiz_chunks(f.area());
    let presented = session.presented();

    let mut progress = format!(
        "Question {}/{}",
        session.current_index(),
        session.questions_count()
    );
    if !presented.category.is_empty() {
        progress.push_str(&format!(" - {}", presented.category));
    }
    if !presented.difficulty.is_empty() {
        progress.push_str(&format!(" ({})", presented.difficulty));
    }

    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question = Paragraph::new(Text::from(presented.text.as_str()))
        .style(Style::default().add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let width = layout.choices_area.width.saturating_sub(8) as usize;
    let correct_position = session.answers().correct_position();
    let items: Vec<ListItem> = presented
        .answer_choices
        .iter()
        .enumerate()
        .map(|(position, choice)| {
            let is_selected = session.selected() == Some(choice.as_str());
            let radio = if is_selected { "(•)" } else { "( )" };
            let label = format!("{} {}", radio, truncate_string(choice, width));

            let style = match session.phase() {
                Phase::AwaitingAnswer { .. } if is_selected => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                Phase::Answered { .. } if correct_position == Some(position) => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Phase::Answered { .. } if is_selected => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                _ => Style::default(),
            };
            ListItem::new(label).style(style)
        })
        .collect();

    let title = match session.phase() {
        Phase::Answered { correct: true, .. } => "Answers - Correct!",
        Phase::Answered { correct: false, .. } => "Answers - Incorrect",
        _ => "Answers",
    };
    let choices = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(choices, layout.choices_area);

    let action = if session.is_answered() {
        if session.is_last_question() {
            " Finish  "
        } else {
            " Next  "
        }
    } else {
        " Submit  "
    };
    let mut help_spans = Vec::new();
    if !session.is_answered() {
        help_spans.extend([
            Span::styled(
                "↑/↓",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Choose  "),
        ]);
    }
    help_spans.extend([
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(action),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit to Form  "),
        Span::from(format!("Score: {}", session.score())),
    ]);

    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit Quiz")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Abandon this quiz and return to the form?")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Return to Form)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
