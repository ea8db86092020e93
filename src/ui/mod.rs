mod practice;
mod quiz;
mod settings;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

use crate::app::{App, Tab};

const TABS: [Tab; 3] = [Tab::Quiz, Tab::Practice, Tab::Settings];

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).split(area);
    render_tabs(frame, chunks[0], app.tab);

    match app.tab {
        Tab::Quiz => quiz::render(frame, chunks[1], app),
        Tab::Practice => practice::render(frame, chunks[1], app),
        Tab::Settings => settings::render(frame, chunks[1], app),
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, current: Tab) {
    let selected = TABS.iter().position(|tab| *tab == current).unwrap_or(0);
    let widget = Tabs::new(TABS.iter().map(|tab| tab.title()))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).bold())
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}
