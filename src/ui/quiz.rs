use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::quiz::{QuizMode, QuizState};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.quiz();
    let config = app.config();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_score(frame, chunks[0], state);
    render_prompt(frame, chunks[1], state, config.mode);

    if app.is_typed_input() {
        render_typed_input(frame, chunks[2], app.typed_answer());
    } else {
        render_options(frame, chunks[2], &state.options, app.selected_option());
    }

    render_feedback(frame, chunks[3], state);
    render_controls(frame, chunks[4], app.is_typed_input());
}

fn render_score(frame: &mut Frame, area: Rect, state: &QuizState) {
    let widget = Paragraph::new(format!("Score: {}", state.score))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, state: &QuizState, mode: QuizMode) {
    let text = match (&state.current_question, state.is_loading) {
        (_, true) => Span::styled("Loading...", Style::default().fg(Color::Yellow)),
        (Some(question), false) => {
            let prompt = match mode {
                QuizMode::KanaToRomaji => question.glyph,
                QuizMode::RomajiToKana => question.romanization,
            };
            Span::styled(prompt, Style::default().fg(Color::White).bold())
        }
        (None, false) => Span::styled("No question", Style::default().fg(Color::DarkGray)),
    };

    let widget = Paragraph::new(vec![Line::from(""), Line::from(text), Line::from("")])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(mode.label()),
        );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let label = OPTION_LABELS.get(index).copied().unwrap_or(' ');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(widget, area);
}

fn render_typed_input(frame: &mut Frame, area: Rect, input: &str) {
    let widget = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::styled(input, Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title("Romaji")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, state: &QuizState) {
    if !state.feedback.visible {
        return;
    }
    let color = if state.feedback.correct {
        Color::Green
    } else {
        Color::Red
    };
    let widget = Paragraph::new(state.feedback.message.as_str())
        .alignment(Alignment::Center)
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, typed: bool) {
    let text = if typed {
        "type romaji  ·  enter submit  ·  tab switch  ·  esc quit"
    } else {
        "j/k navigate  ·  enter select  ·  n skip  ·  tab switch  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
