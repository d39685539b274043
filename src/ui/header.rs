use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Tab};
use crate::sim::{Scheme, Simulation};

const DIM: Color = Color::Rgb(120, 120, 140);
const FRAME: Color = Color::Rgb(60, 60, 80);

fn scheme_of(tab: Tab) -> Option<Scheme> {
    match tab {
        Tab::Overview => None,
        Tab::Euler => Some(Scheme::Euler),
        Tab::Verlet => Some(Scheme::Verlet),
    }
}

/// One view title. Ball views carry a dot in the ball's color.
fn view_title(tab: Tab, selected: bool, sim: &Simulation) -> Line<'static> {
    let text = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(DIM)
    };
    let mut spans = Vec::with_capacity(2);
    if let Some(scheme) = scheme_of(tab) {
        spans.push(Span::styled("● ", Style::default().fg(sim.body(scheme).color())));
    }
    spans.push(Span::styled(tab.title().trim().to_string(), text));
    Line::from(spans)
}

/// Step count and per-ball bounce counts, each in its ball's color.
fn status(sim: &Simulation) -> Line<'static> {
    let mut spans = vec![Span::styled(format!(" t={} ", sim.steps()), Style::default().fg(DIM))];
    for scheme in [Scheme::Euler, Scheme::Verlet] {
        spans.push(Span::styled("│ ", Style::default().fg(FRAME)));
        spans.push(Span::styled(
            format!("{} ↥{} ", scheme.name(), sim.bounces(scheme)),
            Style::default().fg(sim.body(scheme).color()),
        ));
    }
    Line::from(spans).right_aligned()
}

pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let sim = &app.sim;
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| view_title(*t, *t == app.current_tab, sim))
        .collect();

    let c = sim.constants();
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(FRAME))
        .title(Line::from(vec![
            Span::styled(" bouncelab ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(format!("g={} dt={} ", c.gravity, c.dt), Style::default().fg(DIM)),
        ]))
        .title(status(sim));

    let views = Tabs::new(titles)
        .block(block)
        .select(app.current_tab.index())
        .highlight_style(Style::default())
        .divider(Span::styled("  ", Style::default()));

    frame.render_widget(views, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(100, 3)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_header(f, app, area);
            })
            .unwrap();
        terminal
    }

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn header_lists_views_and_counters() {
        let mut app = App::new(&SimConfig::default());
        for _ in 0..3 {
            app.on_frame();
        }
        let terminal = draw(&app);
        let top = row(&terminal, 0);
        assert!(top.contains("bouncelab g=10 dt=0.05"), "{top}");
        assert!(top.contains("t=3"), "{top}");
        assert!(top.contains("Euler ↥0"), "{top}");
        assert!(top.contains("Verlet ↥0"), "{top}");

        let views = row(&terminal, 1);
        assert!(views.contains("Overview"), "{views}");
        assert!(views.contains("● Euler"), "{views}");
        assert!(views.contains("● Verlet"), "{views}");
    }

    #[test]
    fn ball_dots_use_ball_colors() {
        let app = App::new(&SimConfig::default());
        let terminal = draw(&app);
        let buf = terminal.backend().buffer();
        let dots: Vec<Color> = (0..buf.area.width)
            .map(|x| &buf[(x, 1)])
            .filter(|cell| cell.symbol() == "●")
            .map(|cell| cell.fg)
            .collect();
        assert_eq!(dots, [Color::Rgb(217, 156, 166), Color::Rgb(147, 189, 179)]);
    }

    #[test]
    fn selected_view_is_underlined() {
        let mut app = App::new(&SimConfig::default());
        app.current_tab = Tab::Verlet;
        let terminal = draw(&app);
        let buf = terminal.backend().buffer();
        let underlined: String = (0..buf.area.width)
            .map(|x| &buf[(x, 1)])
            .filter(|cell| cell.modifier.contains(Modifier::UNDERLINED))
            .map(|cell| cell.symbol())
            .collect();
        assert_eq!(underlined, "Verlet");
    }
}
