use crate::config::{FilterField, MAX_QUESTIONS, MIN_QUESTIONS};
use crate::form::{ConfigForm, FormField};
use crate::ui::layout::calculate_form_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn key_span(label: &str) -> Span<'_> {
    Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn field_line(label: &str, value: String, focused: bool) -> ListItem<'static> {
    let marker = if focused { "> " } else { "  " };
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    ListItem::new(Line::from(vec![
        Span::styled(format!("{}{:<20}", marker, label), style),
        Span::styled(value, style),
    ]))
}

pub fn draw_form(f: &mut Frame, form: &ConfigForm) {
    let layout = calculate_form_chunks(f.area());

    let title = Paragraph::new("quizWiz")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let focused = form.focused_field();
    let mut items = vec![field_line(
        "Number Of Questions",
        format!(
            "< {} >  ({}-{})",
            form.config.question_count(),
            MIN_QUESTIONS,
            MAX_QUESTIONS
        ),
        focused == FormField::QuestionCount,
    )];

    for field in [
        FilterField::Category,
        FilterField::Type,
        FilterField::Difficulty,
    ] {
        items.push(field_line(
            &field.to_string(),
            format!("< {} >", form.selected_name(field)),
            focused == FormField::Filter(field),
        ));
    }

    items.push(ListItem::new(""));
    let start_style = if focused == FormField::Start {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    items.push(ListItem::new(Line::from(Span::styled("  [ Start Quiz ]", start_style))));

    let fields = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Configure"),
    );
    f.render_widget(fields, layout.fields_area);

    let help_text = vec![Line::from(vec![
        key_span("↑/↓"),
        Span::from(" Field  "),
        key_span("←/→"),
        Span::from(" Change  "),
        key_span("0-9"),
        Span::from(" Count  "),
        key_span("Enter"),
        Span::from(" Start  "),
        key_span("Esc/Ctrl+C"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
