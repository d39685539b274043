pub mod charts;
pub mod header;
pub mod scene;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Tab};
use crate::sim::Scheme;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),   // Content
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    header::render_header(frame, app, chunks[0]);

    match app.current_tab {
        Tab::Overview => render_overview(frame, chunks[1], app),
        Tab::Euler => render_detail(frame, chunks[1], app, Scheme::Euler),
        Tab::Verlet => render_detail(frame, chunks[1], app, Scheme::Verlet),
    }

    render_help(frame, chunks[2]);
}

fn render_overview(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    scene::render_scene(frame, columns[0], &app.sim);
    for (scheme, chunk) in [Scheme::Euler, Scheme::Verlet].into_iter().zip(rows.iter()) {
        let accent = app.sim.body(scheme).color();
        charts::render_energy_chart(frame, *chunk, app.series(scheme), scheme, accent, app.chart_window);
    }
}

fn render_detail(frame: &mut Frame, area: Rect, app: &App, scheme: Scheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(area);

    charts::render_readout(frame, chunks[0], app, scheme);
    let accent = app.sim.body(scheme).color();
    charts::render_energy_chart(frame, chunks[1], app.series(scheme), scheme, accent, app.chart_window);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Color::Rgb(100, 100, 130));
    let sep = Style::default().fg(Color::Rgb(60, 60, 80));
    let help = Line::from(vec![
        Span::styled(" Tab", key),
        Span::styled(" switch view ", text),
        Span::styled("│ ", sep),
        Span::styled("1-3", key),
        Span::styled(" jump to view ", text),
        Span::styled("│ ", sep),
        Span::styled("Esc", key),
        Span::styled(" overview ", text),
        Span::styled("│ ", sep),
        Span::styled("Q", key),
        Span::styled(" quit", text),
    ]);
    frame.render_widget(Paragraph::new(help), area);
}
