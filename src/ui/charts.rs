use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::series::{Channel, EnergySeries};
use crate::sim::Scheme;

const AXIS_COLOR: Color = Color::Rgb(100, 100, 130);

pub fn render_energy_chart(
    frame: &mut Frame,
    area: Rect,
    series: &EnergySeries,
    scheme: Scheme,
    accent: Color,
    window: usize,
) {
    // Point buffers have to outlive the datasets that borrow them
    let points: Vec<Vec<(f64, f64)>> = Channel::all()
        .iter()
        .map(|c| series.points(*c, window))
        .collect();
    let datasets: Vec<Dataset> = Channel::all()
        .iter()
        .zip(points.iter())
        .map(|(c, data)| {
            Dataset::default()
                .name(c.label())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(c.color()))
                .data(data)
        })
        .collect();

    let [x_lo, x_hi] = series.x_bounds(window);
    let [y_lo, y_hi] = series.y_bounds(window);
    let x_labels: Vec<Span> = series
        .time_labels(window)
        .into_iter()
        .map(|l| Span::styled(l, Style::default().fg(AXIS_COLOR)))
        .collect();
    let y_labels: Vec<Span> = [y_lo, (y_lo + y_hi) / 2.0, y_hi]
        .iter()
        .map(|v| Span::styled(format!("{v:.0}"), Style::default().fg(AXIS_COLOR)))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent))
                .title(format!(" {} energy ", scheme.name()))
                .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        )
        .x_axis(
            Axis::default()
                .title("time")
                .style(Style::default().fg(AXIS_COLOR))
                .bounds([x_lo, x_hi])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("energy")
                .style(Style::default().fg(AXIS_COLOR))
                .bounds([y_lo, y_hi])
                .labels(y_labels),
        )
        .legend_position(Some(LegendPosition::TopRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}

/// Current kinematics and the latest energy sample of one ball.
pub fn render_readout(frame: &mut Frame, area: Rect, app: &App, scheme: Scheme) {
    let body = app.sim.body(scheme);
    let accent = body.color();
    let bounces = app.sim.bounces(scheme);
    let label = Style::default().fg(Color::Rgb(120, 120, 140));
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let sep = Span::styled(" │ ", Style::default().fg(Color::Rgb(60, 60, 80)));

    let mut lines = vec![Line::from(vec![
        Span::styled(" y ", label),
        Span::styled(format!("{:.3}", body.y), value),
        sep.clone(),
        Span::styled("vy ", label),
        Span::styled(format!("{:.3}", body.vy), value),
        sep.clone(),
        Span::styled("bounces ", label),
        Span::styled(bounces.to_string(), value),
        sep.clone(),
        Span::styled("samples ", label),
        Span::styled(app.series(scheme).len().to_string(), value),
    ])];

    if let Some(s) = app.series(scheme).last() {
        lines.push(Line::from(vec![
            Span::styled(" mechanical ", label),
            Span::styled(format!("{:.2}", s.mechanical), Style::default().fg(Channel::Mechanical.color())),
            sep.clone(),
            Span::styled("initial ", label),
            Span::styled(format!("{:.2}", s.initial_total), Style::default().fg(Channel::InitialTotal.color())),
            sep,
            Span::styled("loss ", label),
            Span::styled(format!("{:.3}", s.drift), Style::default().fg(Channel::Drift.color())),
        ]));
    } else {
        lines.push(Line::from(Span::styled(" waiting for the first sample...", label)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .title(format!(" {} ball ", scheme.name()));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
