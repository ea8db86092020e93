use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    // The session is locked while a simulated request is running.
    let Ok(session) = app.training().try_lock() else {
        let waiting = Paragraph::new("Loading...")
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(waiting, chunks[1]);
        return;
    };

    let options = format!(
        "{}  ·  {}  ·  {}",
        session.direction.label(),
        session.japanese_format.label(),
        session.difficulty.label()
    );
    frame.render_widget(
        Paragraph::new(options)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        chunks[0],
    );

    let phrase = if session.original_phrase().is_empty() {
        Span::styled("Press ctrl-n for a phrase", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(session.original_phrase(), Style::default().fg(Color::White).bold())
    };
    let prompt = Paragraph::new(vec![Line::from(""), Line::from(phrase)])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title("Translate"),
        );
    frame.render_widget(prompt, chunks[1]);

    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::styled(app.practice_input(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(input, chunks[2]);

    if !session.feedback().is_empty() {
        let feedback = Paragraph::new(session.feedback())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .fg(Color::Yellow);
        frame.render_widget(feedback, chunks[3]);
    }

    let controls = Paragraph::new(
        "enter check  ·  ctrl-n next  ·  ctrl-d direction  ·  ctrl-f format  ·  ctrl-l level  ·  esc quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[4]);
}
