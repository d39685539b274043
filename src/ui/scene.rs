use ratatui::prelude::*;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::*;

use crate::sim::{Body, Constants, Simulation};

const FLOOR_COLOR: Color = Color::Rgb(120, 120, 140);

/// Screen `y` grows down, the canvas grows up.
pub fn canvas_y(c: &Constants, y: f64) -> f64 {
    c.height - y
}

pub fn render_scene(frame: &mut Frame, area: Rect, sim: &Simulation) {
    let c = *sim.constants();
    let bodies: [&Body; 2] = sim.bodies();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
                .title(" Falling balls ")
                .title_style(Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
        )
        .background_color(Color::Rgb(10, 10, 20))
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, c.width])
        .y_bounds([0.0, c.height])
        .paint(move |ctx| {
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: c.width,
                y2: 0.0,
                color: FLOOR_COLOR,
            });
            ctx.layer();
            for body in bodies {
                let y = canvas_y(&c, body.y);
                ctx.draw(&Circle {
                    x: body.x(),
                    y,
                    radius: body.radius(),
                    color: body.color(),
                });
                ctx.print(
                    body.x() + body.radius() * 1.5,
                    y,
                    Span::styled(body.scheme().name(), Style::default().fg(body.color())),
                );
            }
        });

    frame.render_widget(canvas, area);
}
