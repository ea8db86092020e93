use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::quiz::QuizConfiguration;

fn rows(config: &QuizConfiguration) -> [(&'static str, String); 6] {
    let on_off = |flag: bool| (if flag { "on" } else { "off" }).to_string();
    [
        ("Quiz mode", config.mode.label().to_string()),
        ("Input", config.input_mode.label().to_string()),
        ("Hiragana", on_off(config.include_hiragana)),
        ("Katakana", on_off(config.include_katakana)),
        ("Dakuten", on_off(config.include_dakuten)),
        ("Handakuten", on_off(config.include_handakuten)),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
        .margin(1)
        .split(area);

    let config = app.config();
    let lines: Vec<Line> = rows(&config)
        .into_iter()
        .enumerate()
        .map(|(index, (name, value))| {
            let is_selected = index == app.settings_cursor();
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(if is_selected { " > " } else { "   " }, style),
                Span::styled(format!("{:<12}", name), style),
                Span::styled(value, Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title("Kana Settings")
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(widget, chunks[0]);

    let controls = Paragraph::new("j/k navigate  ·  enter toggle  ·  tab switch  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[1]);
}
